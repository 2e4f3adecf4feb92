//! Special-character strip char filter implementation.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::char_filter::CharFilter;

/// Matches a run of characters that are neither alphanumeric nor whitespace.
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("special pattern is valid"));

/// A char filter that deletes characters that are neither alphanumeric nor
/// whitespace.
///
/// This is a broader pass than punctuation stripping: currency signs, math
/// symbols, emoji, and control characters all fall to it, while letters,
/// digits, and whitespace of any script survive. The two passes are
/// independent; the pipeline applies punctuation removal first.
///
/// # Examples
///
/// ```
/// use strigil::analysis::char_filter::CharFilter;
/// use strigil::analysis::char_filter::special::SpecialStripCharFilter;
///
/// let filter = SpecialStripCharFilter::new();
/// assert_eq!(filter.filter("price: $5 + tax"), "price 5  tax");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpecialStripCharFilter;

impl SpecialStripCharFilter {
    /// Create a new special-character strip filter.
    pub fn new() -> Self {
        SpecialStripCharFilter
    }
}

impl CharFilter for SpecialStripCharFilter {
    fn filter(&self, input: &str) -> String {
        SPECIAL.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "strip_special"
    }
}
