//! Result shapes for director reports.

use std::fmt;

use serde::Serialize;

/// Number of directors whose name contains a given substring.
///
/// Displays as `"<name>: <count>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedLikeCount {
    pub name: String,
    pub count: i64,
}

impl fmt::Display for NamedLikeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.count)
    }
}
