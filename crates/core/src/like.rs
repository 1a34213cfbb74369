//! Helpers for building SQL `LIKE` patterns from user input.

/// Escape character paired with `ESCAPE '\'` in every `LIKE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `LIKE` metacharacters so the input matches literally.
///
/// Backslash, `%` and `_` are prefixed with [`LIKE_ESCAPE`].
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%...%` pattern matching any value containing `needle` literally.
///
/// # Examples
///
/// ```
/// use cinedb_core::like::contains_pattern;
/// assert_eq!(contains_pattern("Carlos"), "%Carlos%");
/// assert_eq!(contains_pattern("50%"), "%50\\%%");
/// ```
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}
