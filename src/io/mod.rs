pub mod json_writer;
pub mod snapshot;
