//! Request-level service facade.
//!
//! [`NormalizerService`] is the boundary the presentation layer talks to. It
//! owns one [`Pipeline`] and exposes the two request shapes: single-text
//! processing and batch processing of an uploaded file. Request-level
//! validation happens here; everything below it is total or row-recoverable.
//!
//! # Examples
//!
//! ```
//! use strigil::pipeline::PreprocessingOptions;
//! use strigil::service::NormalizerService;
//!
//! let service = NormalizerService::new();
//! let options = PreprocessingOptions::default();
//!
//! let result = service.process_text("Running dogs!", &options).unwrap();
//! assert_eq!(result.tokens, vec!["run", "dog"]);
//!
//! let batch = service
//!     .process_file("lines.txt", b"First line\nSecond line", &options, None)
//!     .unwrap();
//! assert_eq!(batch.success_count, 2);
//! ```

use log::debug;

use crate::batch::ingest::{DelimitedIngestor, FileKind, Ingestor, PlainTextIngestor, TextUnit};
use crate::batch::runner::{self, BatchResult};
use crate::error::{Result, StrigilError};
use crate::pipeline::{Pipeline, PreprocessingOptions, ProcessingResult};

/// The text-normalization service.
///
/// Holds no per-request state; one instance can serve concurrent requests.
#[derive(Debug, Default)]
pub struct NormalizerService {
    pipeline: Pipeline,
}

impl NormalizerService {
    /// Create a service with the default pipeline.
    pub fn new() -> Self {
        NormalizerService {
            pipeline: Pipeline::new(),
        }
    }

    /// Access the underlying pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Process a single text.
    ///
    /// Fails with [`StrigilError::EmptyInput`] when the text is empty after
    /// trimming; the pipeline itself never fails on real input.
    pub fn process_text(
        &self,
        text: &str,
        options: &PreprocessingOptions,
    ) -> Result<ProcessingResult> {
        if text.trim().is_empty() {
            return Err(StrigilError::EmptyInput);
        }
        self.pipeline.process(text, options)
    }

    /// Process an uploaded file as a batch, in parallel.
    ///
    /// The file kind is inferred from `filename`'s extension. `column`
    /// selects the column to extract from delimited files and is ignored
    /// for plain text. Fatal errors (`UnsupportedFileType`, `MissingColumn`)
    /// return before any row is processed; row-level errors are reported
    /// inline in the [`BatchResult`].
    pub fn process_file(
        &self,
        filename: &str,
        bytes: &[u8],
        options: &PreprocessingOptions,
        column: Option<&str>,
    ) -> Result<BatchResult> {
        let units = self.ingest_file(filename, bytes, column)?;
        Ok(runner::run(&self.pipeline, units, options))
    }

    /// Process an uploaded file as a batch, one row at a time.
    pub fn process_file_sequential(
        &self,
        filename: &str,
        bytes: &[u8],
        options: &PreprocessingOptions,
        column: Option<&str>,
    ) -> Result<BatchResult> {
        let units = self.ingest_file(filename, bytes, column)?;
        Ok(runner::run_sequential(&self.pipeline, units, options))
    }

    fn ingest_file(
        &self,
        filename: &str,
        bytes: &[u8],
        column: Option<&str>,
    ) -> Result<Vec<Result<TextUnit>>> {
        let kind = FileKind::from_filename(filename)?;
        debug!("ingesting {filename} as {kind:?}");

        match kind.delimiter() {
            None => PlainTextIngestor::new().ingest(bytes),
            Some(delimiter) => DelimitedIngestor::new(column)
                .with_delimiter(delimiter)
                .ingest(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_a_request_error() {
        let service = NormalizerService::new();
        let options = PreprocessingOptions::default();

        assert!(matches!(
            service.process_text("", &options),
            Err(StrigilError::EmptyInput)
        ));
        assert!(matches!(
            service.process_text("   \n\t ", &options),
            Err(StrigilError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_text_roundtrip() {
        let service = NormalizerService::new();
        let options = PreprocessingOptions {
            lowercase: true,
            remove_punctuation: true,
            tokenize: true,
            ..PreprocessingOptions::none()
        };

        let result = service.process_text("Hello, World! 123", &options).unwrap();

        assert_eq!(result.processed_text, "hello world 123");
        assert_eq!(result.token_count, 3);
    }

    #[test]
    fn test_unsupported_file_type() {
        let service = NormalizerService::new();
        let options = PreprocessingOptions::default();

        let result = service.process_file("image.png", b"bytes", &options, None);

        assert!(matches!(
            result,
            Err(StrigilError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_missing_column_returns_no_partial_batch() {
        let service = NormalizerService::new();
        let options = PreprocessingOptions::default();

        let result = service.process_file(
            "data.csv",
            b"id,text\n1,hello\n2,world\n",
            &options,
            Some("nonexistent"),
        );

        assert!(matches!(result, Err(StrigilError::MissingColumn(_))));
    }

    #[test]
    fn test_csv_batch() {
        let service = NormalizerService::new();
        let options = PreprocessingOptions::default();

        let batch = service
            .process_file(
                "data.csv",
                b"id,text\n1,The running dogs\n2,Better mice\n",
                &options,
                None,
            )
            .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.success_count, 2);
        assert_eq!(
            batch.rows[0].result().unwrap().tokens,
            vec!["run", "dog"]
        );
        assert_eq!(
            batch.rows[1].result().unwrap().tokens,
            vec!["good", "mouse"]
        );
    }
}
