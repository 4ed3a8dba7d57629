use anyhow::Result;
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_writer;
use crate::pipeline::Stage;

pub struct Stage8Output;

impl Stage8Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage8Output {
    fn name(&self) -> &'static str {
        "stage8_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        fs::create_dir_all(&ctx.output.out_dir)?;
        let artifact = json_writer::build_artifact(ctx)?;
        ctx.artifact = artifact;
        json_writer::write_json(&ctx.output.json_path, &ctx.artifact)?;
        info!(path = %ctx.output.json_path.display(), "stage8_output_ready");
        Ok(())
    }
}
