//! Batch processing of uploaded files.
//!
//! This module turns an uploaded file into a sequence of text rows and runs
//! the preprocessing pipeline over each of them:
//!
//! - [`ingest`] parses file bytes into [`ingest::TextUnit`] rows. Plain-text
//!   files yield one row per line; delimited files yield one row per record
//!   from a selected column.
//! - [`runner`] maps the pipeline over the rows, collecting per-row outcomes
//!   without aborting the batch when a single row fails to decode.
//!
//! Request-level failures (unrecognized file type, missing column) are fatal
//! and surface as errors before any row is processed. Row-level failures are
//! reported inline in the [`runner::BatchResult`], aligned with input order.

pub mod ingest;
pub mod runner;

// Re-export commonly used types
pub use ingest::{DelimitedIngestor, FileKind, Ingestor, PlainTextIngestor, TextUnit};
pub use runner::{BatchResult, RowOutcome};
