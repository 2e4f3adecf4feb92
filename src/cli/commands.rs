//! Command implementations for the Strigil CLI.

use std::fs;

use log::info;

use crate::cli::args::{BatchArgs, Command, ProcessArgs, StrigilArgs};
use crate::cli::output::{output_batch_result, output_processing_result};
use crate::error::{Result, StrigilError};
use crate::service::NormalizerService;

/// Execute a CLI command.
pub fn execute_command(args: StrigilArgs) -> Result<()> {
    let service = NormalizerService::new();

    match &args.command {
        Command::Process(process_args) => process_text(&service, process_args.clone(), &args),
        Command::Batch(batch_args) => process_batch(&service, batch_args.clone(), &args),
    }
}

/// Process a single text and print the result.
fn process_text(
    service: &NormalizerService,
    args: ProcessArgs,
    cli_args: &StrigilArgs,
) -> Result<()> {
    let options = args.options.to_options();
    let result = service.process_text(&args.text, &options)?;

    output_processing_result(&result, cli_args)
}

/// Process a file as a batch and print the per-row results.
fn process_batch(
    service: &NormalizerService,
    args: BatchArgs,
    cli_args: &StrigilArgs,
) -> Result<()> {
    let filename = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StrigilError::unsupported_file_type(args.file.display().to_string()))?
        .to_string();

    let bytes = fs::read(&args.file)?;
    info!("read {} bytes from {}", bytes.len(), args.file.display());

    let options = args.options.to_options();
    let result = if args.sequential {
        service.process_file_sequential(&filename, &bytes, &options, args.column.as_deref())?
    } else {
        service.process_file(&filename, &bytes, &options, args.column.as_deref())?
    };

    output_batch_result(&result, cli_args)
}
