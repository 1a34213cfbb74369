//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read-only queries
//! that accept `&SqlitePool` as the first argument. Parameters are always
//! bound, never interpolated.

pub mod director_repo;
pub mod movie_repo;
pub mod schema_repo;

pub use director_repo::DirectorRepo;
pub use movie_repo::MovieRepo;
pub use schema_repo::SchemaRepo;
