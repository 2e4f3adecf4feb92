//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the text string before it is
//! passed to the tokenizer. Char filters are pure string transformations and
//! run in a fixed order inside the pipeline: case folding first, then
//! punctuation stripping, then special-character stripping, so that
//! punctuation removal cannot re-introduce characters the special-character
//! pass would have stripped.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Locale-independent case folding
//! - [`punctuation::PunctuationStripCharFilter`] - Removes Unicode punctuation
//! - [`special::SpecialStripCharFilter`] - Removes everything that is neither
//!   alphanumeric nor whitespace
//!
//! # Examples
//!
//! ```
//! use strigil::analysis::char_filter::CharFilter;
//! use strigil::analysis::char_filter::punctuation::PunctuationStripCharFilter;
//!
//! let filter = PunctuationStripCharFilter::new();
//! assert_eq!(filter.filter("Hello, World!"), "Hello World");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Implementations must be pure: the same input always yields the same
/// output, and no state is mutated across calls. This keeps the whole
/// pipeline safe to share across threads.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod punctuation;
pub mod special;

// Re-export all char filters for convenient access
pub use lowercase::LowercaseCharFilter;
pub use punctuation::PunctuationStripCharFilter;
pub use special::SpecialStripCharFilter;
