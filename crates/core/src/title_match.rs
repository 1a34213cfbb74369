//! Whole-word matching for movie titles.
//!
//! A word is considered standalone when it is bounded on each side by the
//! start or end of the title, whitespace, a comma, a period, or an
//! apostrophe. Matching is case-insensitive.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// The word selected by the "love movies" report.
pub const LOVE_WORD: &str = "love";

/// Standalone, case-insensitive "love".
const LOVE_PATTERN: &str = r"(?i)(?:^|[\s,.'])love(?:$|[\s,.'])";

static LOVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOVE_PATTERN).expect("valid regex"));

/// Characters (besides whitespace) that delimit a standalone word.
const BOUNDARY_CLASS: &str = r"\s,.'";

/// Compiled whole-word matcher for a single word.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

impl WordMatcher {
    /// Build a matcher for `word`. Regex metacharacters in `word` are escaped.
    pub fn new(word: &str) -> Result<Self, CoreError> {
        let pattern = format!(
            "(?i)(?:^|[{BOUNDARY_CLASS}]){}(?:$|[{BOUNDARY_CLASS}])",
            regex::escape(word)
        );
        let regex = Regex::new(&pattern).map_err(|e| {
            CoreError::InvalidArgument(format!("cannot match word '{word}': {e}"))
        })?;
        Ok(Self { regex })
    }

    /// Whether `title` contains the word as a standalone token.
    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }
}

/// Whether `title` contains `word` as a standalone, case-insensitive token.
///
/// # Examples
///
/// ```
/// use cinedb_core::title_match::contains_word;
/// assert!(contains_word("I Love Paris", "love").unwrap());
/// assert!(!contains_word("Lovecraft", "love").unwrap());
/// ```
pub fn contains_word(title: &str, word: &str) -> Result<bool, CoreError> {
    Ok(WordMatcher::new(word)?.is_match(title))
}

/// Whether `title` contains [`LOVE_WORD`] as a standalone token.
pub fn is_love_title(title: &str) -> bool {
    LOVE_RE.is_match(title)
}
