#![allow(dead_code)]

use cinedb_core::types::DbId;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Schema of the movies dataset, as shipped in `movies.sqlite`.
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE directors (\
        id INTEGER PRIMARY KEY, \
        name TEXT NOT NULL, \
        death_year INTEGER\
    )",
    "CREATE TABLE movies (\
        title TEXT NOT NULL, \
        rating REAL, \
        vote_count INTEGER, \
        start_year INTEGER, \
        minutes INTEGER, \
        genres TEXT, \
        imdb_id TEXT, \
        id INTEGER PRIMARY KEY, \
        director_id INTEGER REFERENCES directors (id)\
    )",
];

// ---------------------------------------------------------------------------
// Pool setup
// ---------------------------------------------------------------------------

/// A single-connection in-memory pool with the dataset schema applied.
///
/// The connection is never recycled so the in-memory database lives as long
/// as the pool.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open");
    apply_schema(&pool).await;
    pool
}

pub async fn apply_schema(pool: &SqlitePool) {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .unwrap_or_else(|e| panic!("schema statement failed: {e}"));
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Column values for one `movies` row.
pub struct NewMovie<'a> {
    pub id: DbId,
    pub title: &'a str,
    pub minutes: Option<i64>,
    pub genres: Option<&'a str>,
    pub start_year: Option<i64>,
    pub director_id: Option<DbId>,
}

pub fn new_movie(id: DbId, title: &str) -> NewMovie<'_> {
    NewMovie {
        id,
        title,
        minutes: Some(100),
        genres: Some("Drama"),
        start_year: Some(2000),
        director_id: None,
    }
}

pub async fn insert_director(pool: &SqlitePool, id: DbId, name: &str, death_year: Option<i64>) {
    sqlx::query("INSERT INTO directors (id, name, death_year) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(death_year)
        .execute(pool)
        .await
        .unwrap_or_else(|e| panic!("insert director {name} failed: {e}"));
}

pub async fn insert_movie(pool: &SqlitePool, movie: NewMovie<'_>) {
    sqlx::query(
        "INSERT INTO movies \
            (id, title, rating, vote_count, start_year, minutes, genres, imdb_id, director_id) \
         VALUES (?, ?, 7.0, 1000, ?, ?, ?, ?, ?)",
    )
    .bind(movie.id)
    .bind(movie.title)
    .bind(movie.start_year)
    .bind(movie.minutes)
    .bind(movie.genres)
    .bind(format!("tt{:07}", movie.id))
    .bind(movie.director_id)
    .execute(pool)
    .await
    .unwrap_or_else(|e| panic!("insert movie {} failed: {e}", movie.title));
}

/// Insert movies with the given titles and default column values.
pub async fn insert_titles(pool: &SqlitePool, titles: &[&str]) {
    for (i, title) in titles.iter().enumerate() {
        insert_movie(pool, new_movie(i as DbId + 1, title)).await;
    }
}
