//! Repository for the `directors` table.

use cinedb_core::like::contains_pattern;
use cinedb_core::reports::{REPORT_DIRECTORS, REPORT_DIRECTORS_COUNT, REPORT_DIRECTORS_NAMED_LIKE};
use sqlx::SqlitePool;

use crate::models::director::NamedLikeCount;

/// Provides read-only reports over directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Total number of directors.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM directors")
            .fetch_one(pool)
            .await?;

        tracing::debug!(
            report = REPORT_DIRECTORS_COUNT,
            row_count = 1,
            count,
            "Report rows fetched"
        );
        Ok(count)
    }

    /// All director names in ascending order.
    pub async fn list_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM directors ORDER BY name ASC")
                .fetch_all(pool)
                .await?;

        tracing::debug!(
            report = REPORT_DIRECTORS,
            row_count = names.len(),
            fields = "name",
            "Report rows fetched"
        );
        Ok(names)
    }

    /// Count directors whose name contains `name`.
    ///
    /// `%` and `_` in `name` match literally. Case sensitivity follows
    /// SQLite's `LIKE` (ASCII case-insensitive).
    pub async fn count_named_like(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<NamedLikeCount, sqlx::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM directors WHERE name LIKE ? ESCAPE '\\'")
                .bind(contains_pattern(name))
                .fetch_one(pool)
                .await?;

        tracing::debug!(
            report = REPORT_DIRECTORS_NAMED_LIKE,
            row_count = 1,
            substring = name,
            count,
            "Report rows fetched"
        );
        Ok(NamedLikeCount {
            name: name.to_string(),
            count,
        })
    }
}
