//! The preprocessing pipeline.
//!
//! [`Pipeline`] composes the analysis stages into one deterministic function
//! from input text and [`PreprocessingOptions`] to a [`ProcessingResult`].
//! The stage order is fixed and not reorderable:
//!
//! ```text
//! lowercase → strip punctuation → strip special → collapse whitespace
//!     → tokenize → remove stopwords → lemmatize → stem → assemble
//! ```
//!
//! Each stage runs only when its option flag is set. The token-level stages
//! (stopwords, lemmatize, stem) are no-ops unless `tokenize` is set, since
//! there are no tokens for them to operate on. When both `lemmatize` and
//! `stem` are requested, lemmatization runs first and stemming is applied to
//! its output; the reverse order would feed non-dictionary stems into the
//! lemma lookup.
//!
//! # Examples
//!
//! ```
//! use strigil::pipeline::{Pipeline, PreprocessingOptions};
//!
//! let pipeline = Pipeline::new();
//! let options = PreprocessingOptions {
//!     lowercase: true,
//!     remove_punctuation: true,
//!     tokenize: true,
//!     ..PreprocessingOptions::none()
//! };
//!
//! let result = pipeline.process("Hello, World! 123", &options).unwrap();
//! assert_eq!(result.processed_text, "hello world 123");
//! assert_eq!(result.tokens, vec!["hello", "world", "123"]);
//! assert_eq!(result.token_count, 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{
    CharFilter, LowercaseCharFilter, PunctuationStripCharFilter, SpecialStripCharFilter,
};
use crate::analysis::token_filter::{Filter, LemmaFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Independent switches selecting which transformations apply.
///
/// All combinations are valid. `remove_stopwords`, `lemmatize`, and `stem`
/// only have an effect when `tokenize` is also set. The serde renames match
/// the request field names used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingOptions {
    /// Fold the text to lowercase.
    pub lowercase: bool,

    /// Delete punctuation characters.
    #[serde(rename = "removePunctuation")]
    pub remove_punctuation: bool,

    /// Delete characters that are neither alphanumeric nor whitespace.
    #[serde(rename = "removeSpecial")]
    pub remove_special: bool,

    /// Split the normalized text into tokens.
    pub tokenize: bool,

    /// Drop stopword tokens.
    #[serde(rename = "removeStopwords")]
    pub remove_stopwords: bool,

    /// Replace each token with its dictionary base form.
    pub lemmatize: bool,

    /// Replace each token with its stem.
    pub stem: bool,
}

impl Default for PreprocessingOptions {
    /// The service defaults: everything on except special-character removal
    /// and stemming.
    fn default() -> Self {
        PreprocessingOptions {
            lowercase: true,
            remove_punctuation: true,
            remove_special: false,
            tokenize: true,
            remove_stopwords: true,
            lemmatize: true,
            stem: false,
        }
    }
}

impl PreprocessingOptions {
    /// Options with every switch off; useful as a base for struct update
    /// syntax.
    pub fn none() -> Self {
        PreprocessingOptions {
            lowercase: false,
            remove_punctuation: false,
            remove_special: false,
            tokenize: false,
            remove_stopwords: false,
            lemmatize: false,
            stem: false,
        }
    }
}

/// The outcome of processing one unit of text.
///
/// Produced exactly once per input and immutable after creation.
/// `token_count` always equals `tokens.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// The raw input text, unchanged.
    pub original_text: String,

    /// The text after all transformations. When tokenization ran, this is
    /// the surviving tokens rejoined with single spaces.
    pub processed_text: String,

    /// The surviving tokens, in input order. Empty when `tokenize` is off.
    pub tokens: Vec<String>,

    /// Number of surviving tokens.
    pub token_count: usize,
}

impl ProcessingResult {
    fn new(original_text: String, processed_text: String, tokens: Vec<String>) -> Self {
        let token_count = tokens.len();
        ProcessingResult {
            original_text,
            processed_text,
            tokens,
            token_count,
        }
    }
}

/// The preprocessing pipeline.
///
/// Stateless and cheap to share: all stages hold only read-only data after
/// construction, so one `Pipeline` can serve concurrent callers without
/// locking.
#[derive(Debug, Default)]
pub struct Pipeline {
    lowercase: LowercaseCharFilter,
    punctuation: PunctuationStripCharFilter,
    special: SpecialStripCharFilter,
    tokenizer: WhitespaceTokenizer,
    stop: StopFilter,
    lemma: LemmaFilter,
    stem: StemFilter,
}

impl Pipeline {
    /// Create a pipeline with the default stage implementations.
    pub fn new() -> Self {
        Pipeline {
            lowercase: LowercaseCharFilter::new(),
            punctuation: PunctuationStripCharFilter::new(),
            special: SpecialStripCharFilter::new(),
            tokenizer: WhitespaceTokenizer::new(),
            stop: StopFilter::new(),
            lemma: LemmaFilter::new(),
            stem: StemFilter::new(),
        }
    }

    /// Process one text with the given options.
    ///
    /// Total over well-formed strings: empty input, or input that the
    /// normalization stages reduce to nothing, yields an empty-token result
    /// rather than an error.
    pub fn process(&self, text: &str, options: &PreprocessingOptions) -> Result<ProcessingResult> {
        let original_text = text.to_string();

        let mut processed = text.to_string();
        if options.lowercase {
            processed = self.lowercase.filter(&processed);
        }
        if options.remove_punctuation {
            processed = self.punctuation.filter(&processed);
        }
        if options.remove_special {
            processed = self.special.filter(&processed);
        }

        // The stripping passes leave double spaces behind; canonicalize
        // before tokenization so joined output never contains runs.
        let processed = collapse_whitespace(&processed);

        if !options.tokenize {
            return Ok(ProcessingResult::new(original_text, processed, Vec::new()));
        }

        let mut tokens = self.tokenizer.tokenize(&processed)?;
        if options.remove_stopwords {
            tokens = self.stop.filter(tokens)?;
        }
        if options.lemmatize {
            tokens = self.lemma.filter(tokens)?;
        }
        if options.stem {
            tokens = self.stem.filter(tokens)?;
        }

        let tokens: Vec<String> = tokens
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect();
        let processed_text = tokens.join(" ");

        Ok(ProcessingResult::new(original_text, processed_text, tokens))
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
