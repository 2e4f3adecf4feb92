//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are responsible for splitting normalized text into tokens,
//! the units that the token filters operate on.
//!
//! # Examples
//!
//! ```
//! use strigil::analysis::tokenizer::Tokenizer;
//! use strigil::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
