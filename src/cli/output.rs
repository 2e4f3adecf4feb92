//! Output formatting for CLI commands.

use serde::Serialize;

use crate::batch::runner::{BatchResult, RowOutcome};
use crate::cli::args::{OutputFormat, StrigilArgs};
use crate::error::Result;
use crate::pipeline::ProcessingResult;

/// Output a single-text processing result in the selected format.
pub fn output_processing_result(result: &ProcessingResult, args: &StrigilArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("original:  {}", result.original_text);
            println!("processed: {}", result.processed_text);
            if result.token_count > 0 {
                println!("tokens:    [{}]", result.tokens.join(", "));
            }
            println!("count:     {}", result.token_count);
            Ok(())
        }
    }
}

/// Output a batch result in the selected format.
pub fn output_batch_result(result: &BatchResult, args: &StrigilArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            for outcome in &result.rows {
                match outcome {
                    RowOutcome::Success(row) => {
                        println!("{}", row.processed_text);
                    }
                    RowOutcome::Error { row, error } => {
                        println!("<row {row} failed: {error}>");
                    }
                }
            }
            println!(
                "{}/{} rows processed successfully",
                result.success_count,
                result.rows.len()
            );
            Ok(())
        }
    }
}

fn output_json<T: Serialize>(value: &T, args: &StrigilArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
