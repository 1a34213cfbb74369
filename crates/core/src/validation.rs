//! Parameter validation for report inputs.

use crate::error::CoreError;

/// Parse a minimum-runtime threshold in minutes.
///
/// Surrounding whitespace is ignored. Non-numeric and negative values are
/// rejected.
pub fn parse_min_minutes(raw: &str) -> Result<i64, CoreError> {
    let trimmed = raw.trim();
    let minutes: i64 = trimmed.parse().map_err(|_| {
        CoreError::InvalidArgument(format!("minutes must be an integer, got '{trimmed}'"))
    })?;
    if minutes < 0 {
        return Err(CoreError::InvalidArgument(format!(
            "minutes must be non-negative, got {minutes}"
        )));
    }
    Ok(minutes)
}

/// Reject a free-text parameter that is empty or only whitespace.
///
/// Non-blank input is returned unchanged, surrounding whitespace included.
pub fn require_label<'a>(field: &str, raw: &'a str) -> Result<&'a str, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(raw)
}
