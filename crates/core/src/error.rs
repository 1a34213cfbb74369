#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
