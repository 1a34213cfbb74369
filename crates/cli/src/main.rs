use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::Cli;
use config::{CliConfig, LogFormat};
use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(AppError::from(err).exit_code());
        }
    };
    init_tracing(config.log_format);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cinedb_cli=info,cinedb_db=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

async fn run(cli: Cli, config: CliConfig) -> AppResult<()> {
    let database_url = cli.database_url.unwrap_or(config.database_url);
    let command = cli.command.unwrap_or_default();

    let pool = cinedb_db::create_pool(&database_url, config.max_connections).await?;
    tracing::info!(%database_url, "Dataset opened");

    if let Err(err) = cinedb_db::health_check(&pool).await {
        pool.close().await;
        return Err(err.into());
    }
    tracing::debug!("Dataset health check passed");

    let result = commands::run(&pool, &command).await;
    pool.close().await;

    let text = commands::render(&result?, cli.compact)?;
    println!("{text}");
    Ok(())
}
