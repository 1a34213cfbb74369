/// Primary keys in the movies dataset are SQLite INTEGER rowids.
pub type DbId = i64;
