//! Result shapes for movie reports.

use serde::Serialize;
use sqlx::FromRow;

/// A movie title with its runtime.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MovieRuntime {
    pub title: String,
    pub minutes: i64,
}

/// A movie joined to its director.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DetailedMovie {
    pub director_name: String,
    pub title: String,
    pub genres: Option<String>,
}

/// A movie released after its director's death.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct LateReleasedMovie {
    pub title: String,
    pub director_name: String,
}

/// Count and average runtime of the movies in one genre.
///
/// `avg_minutes` is `None` when no movie matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreStats {
    pub genre: String,
    pub count: i64,
    pub avg_minutes: Option<f64>,
}

/// A director and how many movies they made in one genre.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DirectorMovieCount {
    pub director_name: String,
    pub movie_count: i64,
}
