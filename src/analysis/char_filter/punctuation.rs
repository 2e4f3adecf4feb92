//! Punctuation strip char filter implementation.
//!
//! Deletes characters in the Unicode punctuation category (`\p{P}`). Using
//! the Unicode category rather than an ASCII list keeps the classification
//! consistent with the rest of the pipeline: a token consisting solely of
//! punctuation is fully removable by this filter regardless of script.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::char_filter::CharFilter;

/// Matches a run of Unicode punctuation characters.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}+").expect("punctuation pattern is valid"));

/// A char filter that deletes punctuation characters.
///
/// # Examples
///
/// ```
/// use strigil::analysis::char_filter::CharFilter;
/// use strigil::analysis::char_filter::punctuation::PunctuationStripCharFilter;
///
/// let filter = PunctuationStripCharFilter::new();
/// assert_eq!(filter.filter("Hello, World! 123"), "Hello World 123");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PunctuationStripCharFilter;

impl PunctuationStripCharFilter {
    /// Create a new punctuation strip filter.
    pub fn new() -> Self {
        PunctuationStripCharFilter
    }

    /// Check whether a character is classified as punctuation by this filter.
    pub fn is_punctuation(c: char) -> bool {
        let mut buf = [0u8; 4];
        PUNCTUATION.is_match(c.encode_utf8(&mut buf))
    }
}

impl CharFilter for PunctuationStripCharFilter {
    fn filter(&self, input: &str) -> String {
        PUNCTUATION.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "strip_punctuation"
    }
}
