//! Lemmatization token filter and lemmatizer implementations.
//!
//! Lemmatization maps a token to its dictionary base form ("geese" →
//! "goose", "running" → "run"). Unlike stemming it aims to produce real
//! words, so it consults an irregular-form table before falling back to
//! regular suffix rules.
//!
//! # Examples
//!
//! ```
//! use strigil::analysis::token_filter::lemma::{DictionaryLemmatizer, Lemmatizer};
//!
//! let lemmatizer = DictionaryLemmatizer::new();
//!
//! assert_eq!(lemmatizer.lemmatize("geese"), "goose");
//! assert_eq!(lemmatizer.lemmatize("studies"), "study");
//! assert_eq!(lemmatizer.lemmatize("running"), "run");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Map a word to its dictionary base form.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// Irregular English forms that no suffix rule can recover.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // nouns
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lives", "life"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("wolves", "wolf"),
    ("women", "woman"),
    // verbs
    ("am", "be"),
    ("are", "be"),
    ("been", "be"),
    ("began", "begin"),
    ("begun", "begin"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("came", "come"),
    ("caught", "catch"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("felt", "feel"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("goes", "go"),
    ("gone", "go"),
    ("had", "have"),
    ("has", "have"),
    ("held", "hold"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("said", "say"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stood", "stand"),
    ("taken", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("won", "win"),
    ("wore", "wear"),
    ("written", "write"),
    ("wrote", "write"),
    // adjectives
    ("best", "good"),
    ("better", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Irregular forms as a lookup table.
static IRREGULAR_FORMS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_FORMS.iter().copied().collect());

/// Dictionary-based lemmatizer for English.
///
/// Lookup order: the irregular-form table first, then regular suffix rules
/// for plurals (`-ies`, `-es`, `-s`) and participles (`-ing`, `-ed`).
/// Comparatives are covered only by the table (better, best, worse, worst);
/// a bare `-er` rule mangles too many nouns. Suffix rules require a minimum
/// remaining stem length so short words like "sing" or "king" are left
/// alone, and restore a doubled consonant or dropped `e` where the
/// inflection consumed one ("running" → "run", "making" → "make").
///
/// Words that match no table entry and no rule are returned unchanged, so
/// numbers and non-English tokens pass through untouched.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer;

impl DictionaryLemmatizer {
    /// Create a new dictionary lemmatizer.
    pub fn new() -> Self {
        DictionaryLemmatizer
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Check if a stem ends with the same consonant twice ("runn", "stopp").
    fn ends_double_consonant(stem: &str) -> bool {
        let mut chars = stem.chars().rev();
        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => a == b && a.is_ascii_alphabetic() && !Self::is_vowel(a),
            _ => false,
        }
    }

    /// Check if a stem ends consonant-vowel-consonant, the shape of words
    /// that dropped a final `e` when inflected ("mak", "com", "hop").
    fn ends_cvc(stem: &str) -> bool {
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n < 3 {
            return false;
        }
        let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
        c1.is_ascii_alphabetic()
            && !Self::is_vowel(c1)
            && Self::is_vowel(v)
            && c2.is_ascii_alphabetic()
            && !Self::is_vowel(c2)
            && !matches!(c2, 'w' | 'x' | 'y')
    }

    /// Count vowel-consonant transitions, the "measure" of a stem.
    fn measure(stem: &str) -> usize {
        let mut m = 0;
        let mut prev_vowel = false;
        for c in stem.chars() {
            let v = Self::is_vowel(c) || (c == 'y' && !prev_vowel);
            if prev_vowel && !v {
                m += 1;
            }
            prev_vowel = v;
        }
        m
    }

    /// Repair a stem left by stripping `-ing` or `-ed`: undouble a doubled
    /// final consonant, or restore a dropped final `e` on one-syllable
    /// consonant-vowel-consonant stems.
    fn repair_stripped_stem(stem: &str) -> String {
        if Self::ends_double_consonant(stem)
            && !matches!(stem.chars().last(), Some('l') | Some('s') | Some('z'))
        {
            stem[..stem.len() - 1].to_string()
        } else if Self::ends_cvc(stem) && Self::measure(stem) == 1 {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    fn contains_vowel(stem: &str) -> bool {
        stem.chars().any(|c| Self::is_vowel(c) || c == 'y')
    }

    /// Apply regular suffix rules to a lowercase word.
    fn apply_rules(word: &str) -> Option<String> {
        let len = word.len();

        // Plurals
        if word.ends_with("ies") && len > 4 {
            return Some(format!("{}y", &word[..len - 3]));
        }
        if word.ends_with("es") && len > 4 {
            let stem = &word[..len - 2];
            if stem.ends_with('s')
                || stem.ends_with('x')
                || stem.ends_with('z')
                || stem.ends_with("ch")
                || stem.ends_with("sh")
            {
                return Some(stem.to_string());
            }
        }
        if word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
            && len > 3
        {
            return Some(word[..len - 1].to_string());
        }

        // Participles
        if word.ends_with("ying") && len > 5 {
            // "studying" keeps its y; only repair stems that need it
            return Some(word[..len - 3].to_string());
        }
        if word.ends_with("ing") && len > 5 {
            let stem = &word[..len - 3];
            if Self::contains_vowel(stem) {
                return Some(Self::repair_stripped_stem(stem));
            }
        }
        if word.ends_with("ied") && len > 4 {
            return Some(format!("{}y", &word[..len - 3]));
        }
        if word.ends_with("ed") && len > 4 {
            let stem = &word[..len - 2];
            if Self::contains_vowel(stem) {
                return Some(Self::repair_stripped_stem(stem));
            }
        }

        None
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if let Some(base) = IRREGULAR_FORMS_MAP.get(lower.as_str()) {
            return (*base).to_string();
        }

        match Self::apply_rules(&lower) {
            Some(base) => base,
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

/// Filter that applies lemmatization to tokens.
pub struct LemmaFilter {
    /// The lemmatizer to use.
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the dictionary lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(DictionaryLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let base = self.lemmatizer.lemmatize(&token.text);
                    token.with_text(base)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = DictionaryLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("geese"), "goose");
        assert_eq!(lemmatizer.lemmatize("mice"), "mouse");
        assert_eq!(lemmatizer.lemmatize("ran"), "run");
        assert_eq!(lemmatizer.lemmatize("was"), "be");
        assert_eq!(lemmatizer.lemmatize("better"), "good");
    }

    #[test]
    fn test_plural_rules() {
        let lemmatizer = DictionaryLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("dogs"), "dog");
        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("wishes"), "wish");
    }

    #[test]
    fn test_participle_rules() {
        let lemmatizer = DictionaryLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("running"), "run");
        assert_eq!(lemmatizer.lemmatize("walking"), "walk");
        assert_eq!(lemmatizer.lemmatize("making"), "make");
        assert_eq!(lemmatizer.lemmatize("falling"), "fall");
        assert_eq!(lemmatizer.lemmatize("stopped"), "stop");
        assert_eq!(lemmatizer.lemmatize("studied"), "study");
        assert_eq!(lemmatizer.lemmatize("studying"), "study");
    }

    #[test]
    fn test_short_words_untouched() {
        let lemmatizer = DictionaryLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("sing"), "sing");
        assert_eq!(lemmatizer.lemmatize("king"), "king");
        assert_eq!(lemmatizer.lemmatize("thing"), "thing");
        assert_eq!(lemmatizer.lemmatize("gas"), "gas");
    }

    #[test]
    fn test_non_words_untouched() {
        let lemmatizer = DictionaryLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("123"), "123");
        assert_eq!(lemmatizer.lemmatize(""), "");
    }

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![
            Token::new("running", 0),
            Token::new("dogs", 1),
            Token::new("geese", 2),
            Token::new("studies", 3).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "dog");
        assert_eq!(result[2].text, "goose");
        assert_eq!(result[3].text, "studies"); // Stopped tokens are not processed
        assert!(result[3].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
