use cinedb_core::error::CoreError;

/// SQLite primary result codes that mean the dataset itself is unusable.
const SQLITE_CANTOPEN: i32 = 14;
const SQLITE_NOTADB: i32 = 26;
const SQLITE_CORRUPT: i32 = 11;

/// Application-level error type for the CLI.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for query
/// failures, and decides the process exit code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedb_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Report output could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Convenience type alias for command return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Normalize into the core taxonomy.
    pub fn classify(&self) -> CoreError {
        match self {
            AppError::Core(core) => core.clone(),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Output(err) => CoreError::Internal(err.to_string()),
        }
    }

    /// Exit code reported to the shell.
    ///
    /// - `2` for invalid arguments.
    /// - `3` when the dataset cannot be opened or read.
    /// - `1` for everything else.
    pub fn exit_code(&self) -> u8 {
        match self.classify() {
            CoreError::InvalidArgument(_) => 2,
            CoreError::DataUnavailable(_) => 3,
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                1
            }
        }
    }
}

/// Classify a sqlx error into the core error taxonomy.
///
/// - I/O, configuration and pool failures mean the dataset is unavailable.
/// - SQLite "cannot open", "not a database" and "corrupt" codes, and
///   missing tables, also mean the dataset is unavailable.
/// - Everything else is internal.
fn classify_sqlx_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => CoreError::DataUnavailable(err.to_string()),
        sqlx::Error::Database(db_err) => {
            let unusable = db_err.code().is_some_and(|code| is_unusable_code(&code))
                || db_err.message().contains("no such table");
            if unusable {
                CoreError::DataUnavailable(db_err.message().to_string())
            } else {
                CoreError::Internal(db_err.message().to_string())
            }
        }
        other => CoreError::Internal(other.to_string()),
    }
}

/// Whether a SQLite result code (primary or extended) means the dataset
/// file is unusable. Extended codes carry the primary code in the low byte.
fn is_unusable_code(code: &str) -> bool {
    code.parse::<i32>()
        .map(|code| code & 0xff)
        .is_ok_and(|primary| matches!(primary, SQLITE_CANTOPEN | SQLITE_NOTADB | SQLITE_CORRUPT))
}
