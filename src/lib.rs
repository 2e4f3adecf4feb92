//! # Strigil
//!
//! A configurable text normalization and tokenization pipeline for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Composable normalization stages (case folding, punctuation and
//!   special-character stripping)
//! - Whitespace tokenization with stopword removal, lemmatization, and
//!   Porter stemming
//! - Batch processing of uploaded files (plain text and delimited tables)
//!   with per-row error reporting
//! - Parallel batch execution with input-order results

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod service;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
