use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// A strategy returned something that is not an ordered permutation of its input
    #[error("{algorithm} produced an invalid ordering: {reason}")]
    Verification {
        algorithm: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
