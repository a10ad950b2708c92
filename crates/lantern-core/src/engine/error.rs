use thiserror::Error;

/// Faults that abort an evaluation before the scoring stages run.
///
/// These never escape the workflow boundary as errors: the pipeline catches
/// them and folds them into an `ok = false` verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("part '{name}' has difficulty {found}; the minimum rating is 1")]
    InvalidDifficulty { name: String, found: u32 },

    #[error("placement of part '{name}' contains a non-finite coordinate")]
    NonFinitePlacement { name: String },
}
