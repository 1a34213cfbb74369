//! Typed result shapes returned by the query repositories.
//!
//! Each struct derives `FromRow` so column names in the SQL select list
//! map onto fields directly, and `Serialize` for report output.

pub mod director;
pub mod movie;
