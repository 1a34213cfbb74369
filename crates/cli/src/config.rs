use cinedb_core::error::CoreError;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/movies.sqlite";

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// CLI configuration loaded from environment variables.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// SQLite URL of the movies dataset.
    pub database_url: String,
    /// Pool size (default: `1`).
    pub max_connections: u32,
    /// Log output format (default: text).
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                     |
    /// |----------------------|-----------------------------|
    /// | `DATABASE_URL`       | `sqlite:data/movies.sqlite` |
    /// | `DB_MAX_CONNECTIONS` | `1`                         |
    /// | `LOG_FORMAT`         | `text`                      |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                CoreError::InvalidArgument(format!(
                    "DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => 1,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(CoreError::InvalidArgument(format!(
                    "LOG_FORMAT must be 'text' or 'json', got '{other}'"
                )))
            }
        };

        Ok(Self {
            database_url,
            max_connections,
            log_format,
        })
    }
}
