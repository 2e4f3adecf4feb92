//! Text analysis module for Strigil.
//!
//! This module provides the building blocks of the preprocessing pipeline:
//! character-level normalization, tokenization, and token filtering. The
//! stages are composed by [`crate::pipeline::Pipeline`] in a fixed order.

pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
