//! Lowercase char filter implementation.

use crate::analysis::char_filter::CharFilter;

/// A char filter that folds text to lowercase.
///
/// Uses Rust's locale-independent Unicode case mapping, so the result does
/// not depend on the environment the process runs in.
///
/// # Examples
///
/// ```
/// use strigil::analysis::char_filter::CharFilter;
/// use strigil::analysis::char_filter::lowercase::LowercaseCharFilter;
///
/// let filter = LowercaseCharFilter::new();
/// assert_eq!(filter.filter("Hello WORLD"), "hello world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("Hello WORLD"), "hello world");
        assert_eq!(filter.filter("already lower"), "already lower");
    }

    #[test]
    fn test_lowercase_unicode() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("GRÜSSE"), "grüsse");
        assert_eq!(filter.filter("ΣΟΦΙΑ"), "σοφια");
    }

    #[test]
    fn test_lowercase_idempotent() {
        let filter = LowercaseCharFilter::new();
        let once = filter.filter("MiXeD CaSe 123");
        let twice = filter.filter(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}
