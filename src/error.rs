use thiserror::Error;

/// Error taxonomy for the simulation core.
///
/// Every failure carries a kind and, where applicable, the offending field.
/// The core never returns a partially computed result alongside an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TwinError {
    /// Out-of-range or invalid enum input (e.g. dose tweak outside 0..=3).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown patient or treatment-arm reference.
    #[error("not found: {0}")]
    NotFound(String),

    /// A clinically required profile attribute needed by the risk scorer
    /// is absent. The engine never substitutes a default for these.
    #[error("computation error: missing required field `{field}`")]
    Computation { field: &'static str },

    /// Month-index sets of compared arms do not align.
    #[error("index mismatch: {0}")]
    IndexMismatch(String),
}
