//! Batch execution of the preprocessing pipeline.
//!
//! The runner maps the pipeline over ingested rows and collects one
//! [`RowOutcome`] per input row. Processing never short-circuits: a row that
//! failed to decode upstream is recorded as an error outcome and the
//! remaining rows are still processed. Results are always returned in input
//! row order, even when rows are processed in parallel.

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::batch::ingest::TextUnit;
use crate::error::Result;
use crate::pipeline::{Pipeline, PreprocessingOptions, ProcessingResult};

/// The outcome of one batch row: a processing result or a row-level error.
///
/// Modeled as a tagged value rather than a propagated error so that a bad
/// row never aborts the rows around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The row was processed successfully.
    Success(ProcessingResult),
    /// The row could not be processed; `row` is its 0-based input index.
    Error { row: usize, error: String },
}

impl RowOutcome {
    /// Check if this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, RowOutcome::Success(_))
    }

    /// Get the processing result, if this outcome is a success.
    pub fn result(&self) -> Option<&ProcessingResult> {
        match self {
            RowOutcome::Success(result) => Some(result),
            RowOutcome::Error { .. } => None,
        }
    }
}

/// The ordered outcomes of one batch request.
///
/// `rows` is aligned with the input: the outcome at index `i` belongs to
/// input row `i`. Created for the duration of one request and discarded
/// after the response is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Per-row outcomes in input order.
    pub rows: Vec<RowOutcome>,
    /// Number of rows that processed successfully.
    pub success_count: usize,
}

impl BatchResult {
    /// Build a batch result from ordered row outcomes.
    pub fn new(rows: Vec<RowOutcome>) -> Self {
        let success_count = rows.iter().filter(|outcome| outcome.is_success()).count();
        BatchResult {
            rows,
            success_count,
        }
    }

    /// Total number of rows in the batch.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Process ingested rows in parallel, preserving input order.
///
/// Rows are distributed across the rayon thread pool; the indexed collect
/// puts every outcome back into its input slot regardless of completion
/// order.
pub fn run(
    pipeline: &Pipeline,
    units: Vec<Result<TextUnit>>,
    options: &PreprocessingOptions,
) -> BatchResult {
    info!("processing batch of {} rows", units.len());

    let rows: Vec<RowOutcome> = units
        .into_par_iter()
        .enumerate()
        .map(|(row, unit)| row_outcome(pipeline, row, unit, options))
        .collect();

    let result = BatchResult::new(rows);
    info!(
        "batch complete: {}/{} rows succeeded",
        result.success_count,
        result.len()
    );
    result
}

/// Process ingested rows one at a time, preserving input order.
pub fn run_sequential(
    pipeline: &Pipeline,
    units: Vec<Result<TextUnit>>,
    options: &PreprocessingOptions,
) -> BatchResult {
    info!("processing batch of {} rows sequentially", units.len());

    let rows: Vec<RowOutcome> = units
        .into_iter()
        .enumerate()
        .map(|(row, unit)| row_outcome(pipeline, row, unit, options))
        .collect();

    BatchResult::new(rows)
}

fn row_outcome(
    pipeline: &Pipeline,
    row: usize,
    unit: Result<TextUnit>,
    options: &PreprocessingOptions,
) -> RowOutcome {
    let unit = match unit {
        Ok(unit) => unit,
        Err(e) => {
            debug!("row {row} skipped: {e}");
            return RowOutcome::Error {
                row,
                error: e.to_string(),
            };
        }
    };

    match pipeline.process(&unit.text, options) {
        Ok(result) => RowOutcome::Success(result),
        Err(e) => RowOutcome::Error {
            row,
            error: e.to_string(),
        },
    }
}
