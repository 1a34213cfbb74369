//! Repository for the `movies` table and its join to `directors`.

use cinedb_core::reports::{
    AVG_MINUTES_PRECISION, REPORT_DETAILED_MOVIES, REPORT_GENRE_STATS, REPORT_LATE_RELEASED,
    REPORT_LONGER_THAN, REPORT_LOVE_MOVIES, REPORT_TOP_DIRECTORS, TOP_DIRECTORS_LIMIT,
};
use cinedb_core::title_match::{is_love_title, LOVE_WORD};
use sqlx::SqlitePool;

use crate::models::movie::{
    DetailedMovie, DirectorMovieCount, GenreStats, LateReleasedMovie, MovieRuntime,
};

/// Provides read-only reports over movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Titles containing "love" as a standalone word, in ascending order.
    ///
    /// SQLite narrows the candidates with a substring `LIKE`; the whole-word
    /// check runs in-process so its boundaries are exact.
    pub async fn find_love_titles(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let candidates: Vec<String> = sqlx::query_scalar(
            "SELECT title FROM movies \
             WHERE title LIKE ? \
             ORDER BY title",
        )
        .bind(format!("%{LOVE_WORD}%"))
        .fetch_all(pool)
        .await?;

        let candidate_count = candidates.len();
        let titles: Vec<String> = candidates
            .into_iter()
            .filter(|title| is_love_title(title))
            .collect();

        tracing::debug!(
            report = REPORT_LOVE_MOVIES,
            candidate_count,
            row_count = titles.len(),
            fields = "title",
            "Report rows fetched"
        );
        Ok(titles)
    }

    /// Movies running at least `min_minutes`, ordered by title.
    pub async fn find_longer_than(
        pool: &SqlitePool,
        min_minutes: i64,
    ) -> Result<Vec<MovieRuntime>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MovieRuntime>(
            "SELECT title, minutes FROM movies \
             WHERE minutes >= ? \
             ORDER BY title",
        )
        .bind(min_minutes)
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            report = REPORT_LONGER_THAN,
            min_minutes,
            row_count = rows.len(),
            fields = "title, minutes",
            "Report rows fetched"
        );
        Ok(rows)
    }

    /// Every movie that has a director, with the director's name and genre.
    pub async fn list_detailed(pool: &SqlitePool) -> Result<Vec<DetailedMovie>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DetailedMovie>(
            "SELECT directors.name AS director_name, movies.title, movies.genres \
             FROM movies \
             JOIN directors ON directors.id = movies.director_id \
             ORDER BY movies.id",
        )
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            report = REPORT_DETAILED_MOVIES,
            row_count = rows.len(),
            fields = "director_name, title, genres",
            "Report rows fetched"
        );
        Ok(rows)
    }

    /// Movies whose start year is after their director's death year.
    ///
    /// Directors without a death year never qualify.
    pub async fn find_late_released(
        pool: &SqlitePool,
    ) -> Result<Vec<LateReleasedMovie>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LateReleasedMovie>(
            "SELECT movies.title, directors.name AS director_name \
             FROM movies \
             JOIN directors ON directors.id = movies.director_id \
             WHERE movies.start_year > directors.death_year \
             ORDER BY movies.title",
        )
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            report = REPORT_LATE_RELEASED,
            row_count = rows.len(),
            fields = "title, director_name",
            "Report rows fetched"
        );
        Ok(rows)
    }

    /// Movie count and average runtime for an exact genre label.
    ///
    /// An unknown genre yields `count = 0` and no average.
    pub async fn genre_stats(pool: &SqlitePool, genre: &str) -> Result<GenreStats, sqlx::Error> {
        let (count, avg_minutes): (i64, Option<f64>) = sqlx::query_as(
            "SELECT COUNT(*), ROUND(AVG(minutes), ?) \
             FROM movies \
             WHERE genres = ?",
        )
        .bind(AVG_MINUTES_PRECISION)
        .bind(genre)
        .fetch_one(pool)
        .await?;

        tracing::debug!(
            report = REPORT_GENRE_STATS,
            genre,
            row_count = 1,
            fields = "genre, count, avg_minutes",
            "Report rows fetched"
        );
        Ok(GenreStats {
            genre: genre.to_string(),
            count,
            avg_minutes,
        })
    }

    /// The directors with the most movies in a genre, at most
    /// [`TOP_DIRECTORS_LIMIT`] of them.
    ///
    /// Ordered by movie count descending, then director name ascending.
    pub async fn top_directors_for_genre(
        pool: &SqlitePool,
        genre: &str,
    ) -> Result<Vec<DirectorMovieCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DirectorMovieCount>(
            "SELECT directors.name AS director_name, COUNT(*) AS movie_count \
             FROM movies \
             JOIN directors ON directors.id = movies.director_id \
             WHERE movies.genres = ? \
             GROUP BY directors.id, directors.name \
             ORDER BY movie_count DESC, directors.name ASC \
             LIMIT ?",
        )
        .bind(genre)
        .bind(TOP_DIRECTORS_LIMIT)
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            report = REPORT_TOP_DIRECTORS,
            genre,
            row_count = rows.len(),
            fields = "director_name, movie_count",
            "Report rows fetched"
        );
        Ok(rows)
    }
}
