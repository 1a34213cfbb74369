//! Command-line surface: one subcommand per report plus a combined report.

use cinedb_core::reports::{DEFAULT_DIRECTOR_NAME, DEFAULT_GENRE, DEFAULT_MIN_MINUTES};
use cinedb_core::validation::{parse_min_minutes, require_label};
use cinedb_db::models::movie::{
    DetailedMovie, DirectorMovieCount, GenreStats, LateReleasedMovie, MovieRuntime,
};
use cinedb_db::repositories::{DirectorRepo, MovieRepo, SchemaRepo};
use cinedb_db::DbPool;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Parser)]
#[command(name = "cinedb")]
#[command(about = "Read-only reports over a movies/directors SQLite dataset", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Dataset URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the tables defined in the dataset
    Tables,

    /// Count directors
    DirectorsCount,

    /// List director names alphabetically
    Directors,

    /// List titles containing the word "love"
    LoveMovies,

    /// Count directors whose name contains a substring
    DirectorsNamedLike {
        /// Substring to search for (matched literally)
        substring: String,
    },

    /// List movies running at least the given number of minutes
    LongerThan {
        /// Minimum runtime in minutes
        minutes: String,
    },

    /// List every movie with its director and genre
    DetailedMovies,

    /// List movies released after their director's death
    LateReleased,

    /// Show movie count and average runtime for a genre
    GenreStats {
        /// Exact genre label
        genre: String,
    },

    /// Show the five directors with the most movies in a genre
    TopDirectors {
        /// Exact genre label
        genre: String,
    },

    /// Run every report in sequence
    Report {
        /// Director-name substring
        #[arg(long, default_value = DEFAULT_DIRECTOR_NAME)]
        name: String,

        /// Minimum runtime in minutes
        #[arg(long, default_value_t = DEFAULT_MIN_MINUTES.to_string())]
        minutes: String,

        /// Genre label
        #[arg(long, default_value = DEFAULT_GENRE)]
        genre: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Report {
            name: DEFAULT_DIRECTOR_NAME.to_string(),
            minutes: DEFAULT_MIN_MINUTES.to_string(),
            genre: DEFAULT_GENRE.to_string(),
        }
    }
}

/// Output of the combined report, in execution order.
#[derive(Debug, Serialize)]
pub struct FullReport {
    pub tables: Vec<String>,
    pub directors_count: i64,
    pub directors: Vec<String>,
    pub love_movies: Vec<String>,
    pub directors_named_like: String,
    pub movies_longer_than: Vec<MovieRuntime>,
    pub detailed_movies: Vec<DetailedMovie>,
    pub late_released_movies: Vec<LateReleasedMovie>,
    pub genre_stats: GenreStats,
    pub top_directors: Vec<DirectorMovieCount>,
}

/// Validate arguments, run the command against `pool`, and return its JSON
/// value.
///
/// Arguments are validated before any query runs.
pub async fn run(pool: &DbPool, command: &Command) -> AppResult<serde_json::Value> {
    let value = match command {
        Command::Tables => serde_json::to_value(SchemaRepo::list_tables(pool).await?)?,
        Command::DirectorsCount => serde_json::to_value(DirectorRepo::count(pool).await?)?,
        Command::Directors => serde_json::to_value(DirectorRepo::list_names(pool).await?)?,
        Command::LoveMovies => serde_json::to_value(MovieRepo::find_love_titles(pool).await?)?,
        Command::DirectorsNamedLike { substring } => {
            let substring = require_label("substring", substring)?;
            let result = DirectorRepo::count_named_like(pool, substring).await?;
            serde_json::Value::String(result.to_string())
        }
        Command::LongerThan { minutes } => {
            let minutes = parse_min_minutes(minutes)?;
            serde_json::to_value(MovieRepo::find_longer_than(pool, minutes).await?)?
        }
        Command::DetailedMovies => serde_json::to_value(MovieRepo::list_detailed(pool).await?)?,
        Command::LateReleased => {
            serde_json::to_value(MovieRepo::find_late_released(pool).await?)?
        }
        Command::GenreStats { genre } => {
            let genre = require_label("genre", genre)?;
            serde_json::to_value(MovieRepo::genre_stats(pool, genre).await?)?
        }
        Command::TopDirectors { genre } => {
            let genre = require_label("genre", genre)?;
            serde_json::to_value(MovieRepo::top_directors_for_genre(pool, genre).await?)?
        }
        Command::Report {
            name,
            minutes,
            genre,
        } => {
            let name = require_label("name", name)?;
            let minutes = parse_min_minutes(minutes)?;
            let genre = require_label("genre", genre)?;
            serde_json::to_value(full_report(pool, name, minutes, genre).await?)?
        }
    };
    Ok(value)
}

/// Run every report in sequence with the given parameters.
pub async fn full_report(
    pool: &DbPool,
    name: &str,
    min_minutes: i64,
    genre: &str,
) -> AppResult<FullReport> {
    Ok(FullReport {
        tables: SchemaRepo::list_tables(pool).await?,
        directors_count: DirectorRepo::count(pool).await?,
        directors: DirectorRepo::list_names(pool).await?,
        love_movies: MovieRepo::find_love_titles(pool).await?,
        directors_named_like: DirectorRepo::count_named_like(pool, name)
            .await?
            .to_string(),
        movies_longer_than: MovieRepo::find_longer_than(pool, min_minutes).await?,
        detailed_movies: MovieRepo::list_detailed(pool).await?,
        late_released_movies: MovieRepo::find_late_released(pool).await?,
        genre_stats: MovieRepo::genre_stats(pool, genre).await?,
        top_directors: MovieRepo::top_directors_for_genre(pool, genre).await?,
    })
}

/// Render a report value as JSON text.
pub fn render(value: &serde_json::Value, compact: bool) -> AppResult<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}
