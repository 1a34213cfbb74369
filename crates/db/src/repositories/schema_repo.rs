//! Repository for dataset metadata (`sqlite_master`).

use cinedb_core::reports::REPORT_TABLES;
use sqlx::SqlitePool;

/// Provides introspection of the tables defined in the dataset.
pub struct SchemaRepo;

impl SchemaRepo {
    /// List the names of all tables, sorted by name.
    pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            report = REPORT_TABLES,
            row_count = tables.len(),
            fields = "name",
            "Report rows fetched"
        );
        Ok(tables)
    }
}
