//! File ingestion for batch processing.
//!
//! Ingestors convert uploaded file bytes into a sequence of [`TextUnit`]
//! rows. Each row is individually fallible: a line or cell that cannot be
//! decoded becomes a row-level error that the batch runner reports inline,
//! while the remaining rows are processed normally. Only precondition
//! failures the caller controls (an unrecognized extension, a column name
//! absent from the header) are fatal to the whole ingestion.
//!
//! # Examples
//!
//! ```
//! use strigil::batch::ingest::{Ingestor, PlainTextIngestor};
//!
//! let ingestor = PlainTextIngestor::new();
//! let rows = ingestor.ingest(b"first line\nsecond line").unwrap();
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].as_ref().unwrap().text, "first line");
//! ```

use std::path::Path;
use std::str;

use csv::ReaderBuilder;

use crate::error::{Result, StrigilError};

/// Default column to extract from delimited files.
pub const DEFAULT_TEXT_COLUMN: &str = "text";

/// The kind of an uploaded file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// One document per line.
    PlainText,
    /// Comma-delimited rows with a header.
    Csv,
    /// Tab-delimited rows with a header.
    Tsv,
}

impl FileKind {
    /// Infer the file kind from a file name.
    ///
    /// Fails with [`StrigilError::UnsupportedFileType`] when the extension
    /// is missing or not one of the supported kinds.
    pub fn from_filename(filename: &str) -> Result<FileKind> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("txt") => Ok(FileKind::PlainText),
            Some("csv") => Ok(FileKind::Csv),
            Some("tsv") => Ok(FileKind::Tsv),
            _ => Err(StrigilError::unsupported_file_type(filename)),
        }
    }

    /// The delimiter byte for delimited kinds.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            FileKind::PlainText => None,
            FileKind::Csv => Some(b','),
            FileKind::Tsv => Some(b'\t'),
        }
    }
}

/// One row of batch input: a row index and the raw text extracted for it.
///
/// Row indices are 0-based over the data rows of the source file (lines for
/// plain text, records after the header for delimited files) and stay
/// aligned with it, so results can be reported against the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    /// 0-based row index in the source file.
    pub row: usize,
    /// The raw text of this row, possibly empty.
    pub text: String,
}

impl TextUnit {
    /// Create a new text unit.
    pub fn new<S: Into<String>>(row: usize, text: S) -> Self {
        TextUnit {
            row,
            text: text.into(),
        }
    }
}

/// A trait for converting uploaded file bytes into text rows.
///
/// The outer `Result` covers fatal ingestion failures; the inner per-row
/// `Result` carries rows that could not be decoded.
pub trait Ingestor: Send + Sync {
    /// Parse file bytes into a sequence of per-row results.
    fn ingest(&self, bytes: &[u8]) -> Result<Vec<Result<TextUnit>>>;

    /// Get the name of this ingestor.
    fn name(&self) -> &'static str;
}

/// An ingestor for plain-text files: one document per line.
///
/// Blank lines are preserved as empty-text rows so row indices stay aligned
/// with the source file. Lines that are not valid UTF-8 become row-level
/// decode errors rather than aborting the file.
#[derive(Debug, Clone, Default)]
pub struct PlainTextIngestor;

impl PlainTextIngestor {
    /// Create a new plain-text ingestor.
    pub fn new() -> Self {
        PlainTextIngestor
    }
}

impl Ingestor for PlainTextIngestor {
    fn ingest(&self, bytes: &[u8]) -> Result<Vec<Result<TextUnit>>> {
        let mut lines: Vec<&[u8]> = bytes.split(|&b| b == b'\n').collect();

        // A trailing newline terminates the last line, it does not open a
        // new empty row.
        if bytes.ends_with(b"\n") {
            lines.pop();
        }

        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                match str::from_utf8(line) {
                    Ok(text) => Ok(TextUnit::new(row, text)),
                    Err(e) => Err(StrigilError::row_decode(row, format!("invalid UTF-8: {e}"))),
                }
            })
            .collect();

        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}

/// An ingestor for delimited files (CSV, TSV) with a header row.
///
/// Extracts a single named column from each record. A header that does not
/// contain the selected column is a fatal [`StrigilError::MissingColumn`] —
/// the column choice is a precondition the caller controls. Records that
/// cannot be read, or whose selected cell is not valid UTF-8, become
/// row-level decode errors.
#[derive(Debug, Clone)]
pub struct DelimitedIngestor {
    /// The column to extract.
    column: String,
    /// Field delimiter byte (default: ',')
    delimiter: u8,
}

impl Default for DelimitedIngestor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DelimitedIngestor {
    /// Create a new delimited ingestor extracting the given column, or
    /// [`DEFAULT_TEXT_COLUMN`] if unspecified.
    pub fn new(column: Option<&str>) -> Self {
        DelimitedIngestor {
            column: column.unwrap_or(DEFAULT_TEXT_COLUMN).to_string(),
            delimiter: b',',
        }
    }

    /// Set a custom delimiter byte.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The column this ingestor extracts.
    pub fn column(&self) -> &str {
        &self.column
    }
}

impl Ingestor for DelimitedIngestor {
    fn ingest(&self, bytes: &[u8]) -> Result<Vec<Result<TextUnit>>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader
            .byte_headers()
            .map_err(|e| StrigilError::other(format!("failed to read header: {e}")))?;

        let column_index = headers
            .iter()
            .position(|header| header == self.column.as_bytes())
            .ok_or_else(|| StrigilError::missing_column(&self.column))?;

        let rows = reader
            .byte_records()
            .enumerate()
            .map(|(row, record)| {
                let record =
                    record.map_err(|e| StrigilError::row_decode(row, e.to_string()))?;
                let cell = record.get(column_index).ok_or_else(|| {
                    StrigilError::row_decode(row, format!("record has no field {column_index}"))
                })?;
                let text = str::from_utf8(cell)
                    .map_err(|e| StrigilError::row_decode(row, format!("invalid UTF-8: {e}")))?;
                Ok(TextUnit::new(row, text))
            })
            .collect();

        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "delimited"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_inference() {
        assert_eq!(FileKind::from_filename("notes.txt").unwrap(), FileKind::PlainText);
        assert_eq!(FileKind::from_filename("data.csv").unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_filename("DATA.TSV").unwrap(), FileKind::Tsv);

        assert!(matches!(
            FileKind::from_filename("report.pdf"),
            Err(StrigilError::UnsupportedFileType(_))
        ));
        assert!(matches!(
            FileKind::from_filename("no_extension"),
            Err(StrigilError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_plain_text_lines() {
        let ingestor = PlainTextIngestor::new();
        let rows = ingestor.ingest(b"one\ntwo\nthree\n").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_ref().unwrap(), &TextUnit::new(0, "one"));
        assert_eq!(rows[2].as_ref().unwrap(), &TextUnit::new(2, "three"));
    }

    #[test]
    fn test_plain_text_blank_lines_preserved() {
        let ingestor = PlainTextIngestor::new();
        let rows = ingestor.ingest(b"one\n\nthree").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].as_ref().unwrap().text, "");
        assert_eq!(rows[2].as_ref().unwrap().row, 2);
    }

    #[test]
    fn test_plain_text_crlf() {
        let ingestor = PlainTextIngestor::new();
        let rows = ingestor.ingest(b"one\r\ntwo\r\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_ref().unwrap().text, "one");
        assert_eq!(rows[1].as_ref().unwrap().text, "two");
    }

    #[test]
    fn test_plain_text_invalid_utf8_is_row_level() {
        let ingestor = PlainTextIngestor::new();
        let rows = ingestor.ingest(b"good\n\xff\xfe\nalso good").unwrap();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert!(matches!(
            rows[1].as_ref().unwrap_err(),
            StrigilError::RowDecode { row: 1, .. }
        ));
        assert!(rows[2].is_ok());
    }

    #[test]
    fn test_delimited_extracts_column() {
        let ingestor = DelimitedIngestor::new(None);
        let rows = ingestor
            .ingest(b"id,text\n1,hello world\n2,goodbye\n")
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_ref().unwrap(), &TextUnit::new(0, "hello world"));
        assert_eq!(rows[1].as_ref().unwrap(), &TextUnit::new(1, "goodbye"));
    }

    #[test]
    fn test_delimited_custom_column() {
        let ingestor = DelimitedIngestor::new(Some("body"));
        let rows = ingestor.ingest(b"body,text\nfrom body,from text\n").unwrap();

        assert_eq!(rows[0].as_ref().unwrap().text, "from body");
    }

    #[test]
    fn test_delimited_missing_column_is_fatal() {
        let ingestor = DelimitedIngestor::new(Some("nonexistent"));
        let result = ingestor.ingest(b"id,text\n1,hello\n");

        assert!(matches!(
            result.unwrap_err(),
            StrigilError::MissingColumn(column) if column == "nonexistent"
        ));
    }

    #[test]
    fn test_delimited_quoted_fields() {
        let ingestor = DelimitedIngestor::new(None);
        let rows = ingestor
            .ingest(b"id,text\n1,\"hello, quoted world\"\n")
            .unwrap();

        assert_eq!(rows[0].as_ref().unwrap().text, "hello, quoted world");
    }

    #[test]
    fn test_delimited_bad_row_is_row_level() {
        let ingestor = DelimitedIngestor::new(None);
        // Row 0 has a field count mismatch; row 1 is fine.
        let rows = ingestor.ingest(b"id,text\n1,hello,extra\n2,fine\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert!(matches!(
            rows[0].as_ref().unwrap_err(),
            StrigilError::RowDecode { row: 0, .. }
        ));
        assert_eq!(rows[1].as_ref().unwrap().text, "fine");
    }

    #[test]
    fn test_tab_delimiter() {
        let ingestor = DelimitedIngestor::new(None).with_delimiter(b'\t');
        let rows = ingestor.ingest(b"id\ttext\n1\thello there\n").unwrap();

        assert_eq!(rows[0].as_ref().unwrap().text, "hello there");
    }

    #[test]
    fn test_ingestor_names() {
        assert_eq!(PlainTextIngestor::new().name(), "plain_text");
        assert_eq!(DelimitedIngestor::new(None).name(), "delimited");
    }
}
