//! Report names and limits shared by the query layer and the CLI.

/// Maximum number of rows returned by the top-directors report.
pub const TOP_DIRECTORS_LIMIT: i64 = 5;

/// Decimal places kept for average runtimes.
pub const AVG_MINUTES_PRECISION: i32 = 2;

// ---------------------------------------------------------------------------
// Report names (used as the `report` field in diagnostics)
// ---------------------------------------------------------------------------

pub const REPORT_TABLES: &str = "tables";
pub const REPORT_DIRECTORS_COUNT: &str = "directors_count";
pub const REPORT_DIRECTORS: &str = "directors";
pub const REPORT_LOVE_MOVIES: &str = "love_movies";
pub const REPORT_DIRECTORS_NAMED_LIKE: &str = "directors_named_like";
pub const REPORT_LONGER_THAN: &str = "movies_longer_than";
pub const REPORT_DETAILED_MOVIES: &str = "detailed_movies";
pub const REPORT_LATE_RELEASED: &str = "late_released_movies";
pub const REPORT_GENRE_STATS: &str = "genre_stats";
pub const REPORT_TOP_DIRECTORS: &str = "top_directors";

// ---------------------------------------------------------------------------
// Defaults for the combined report
// ---------------------------------------------------------------------------

/// Director-name substring used by the combined report.
pub const DEFAULT_DIRECTOR_NAME: &str = "Carlos";

/// Minimum runtime (minutes) used by the combined report.
pub const DEFAULT_MIN_MINUTES: i64 = 700;

/// Genre label used by the combined report.
pub const DEFAULT_GENRE: &str = "Comedy";
