//! Scenarios for the CLI command layer.

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use strigil::cli::args::StrigilArgs;
use strigil::cli::commands::execute_command;
use strigil::error::StrigilError;

#[test]
fn process_command_runs() {
    let args =
        StrigilArgs::try_parse_from(["strigil", "-f", "json", "process", "Hello, World!"]).unwrap();

    execute_command(args).unwrap();
}

#[test]
fn process_command_rejects_empty_text() {
    let args = StrigilArgs::try_parse_from(["strigil", "process", "   "]).unwrap();

    assert!(matches!(
        execute_command(args),
        Err(StrigilError::EmptyInput)
    ));
}

#[test]
fn batch_command_processes_csv_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(file, "id,text").unwrap();
    writeln!(file, "1,The running dogs").unwrap();
    writeln!(file, "2,Hello again").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let args =
        StrigilArgs::try_parse_from(["strigil", "-f", "json", "batch", path, "--sequential"])
            .unwrap();

    execute_command(args).unwrap();
}

#[test]
fn batch_command_fails_on_missing_file() {
    let args =
        StrigilArgs::try_parse_from(["strigil", "batch", "/nonexistent/path/data.txt"]).unwrap();

    assert!(matches!(execute_command(args), Err(StrigilError::Io(_))));
}

#[test]
fn batch_command_fails_on_unknown_extension() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();

    let args = StrigilArgs::try_parse_from(["strigil", "batch", path]).unwrap();

    assert!(matches!(
        execute_command(args),
        Err(StrigilError::UnsupportedFileType(_))
    ));
}
