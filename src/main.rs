use clap::Parser;
use colored::Colorize;
use sheet_export::cli;
use sheet_export::config::{ExportConfig, DEFAULT_INPUT, DEFAULT_JSON, DEFAULT_REPORT};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sheet-export")]
#[command(version)]
#[command(about = "Summarize a spreadsheet as text and export its rows as JSON")]
#[command(long_about = "Sheet Export - spreadsheet summary and JSON export

Reads the first worksheet of a spreadsheet (xlsx, xlsm, xlsb, xls, ods).
The first non-blank row is the header.

OUTPUTS:
  report  - column names, one JSON line per row, inferred column types
  json    - pretty-printed JSON array, one object per row

EXAMPLES:
  sheet-export                                   # default paths
  sheet-export book.xlsx --report a.txt --json a.json")]
struct Cli {
    /// Spreadsheet to read (first worksheet)
    #[arg(default_value = DEFAULT_INPUT, env = "SHEET_EXPORT_INPUT")]
    input: PathBuf,

    /// Text report output path
    #[arg(long, default_value = DEFAULT_REPORT, env = "SHEET_EXPORT_REPORT")]
    report: PathBuf,

    /// JSON export output path
    #[arg(long, default_value = DEFAULT_JSON, env = "SHEET_EXPORT_JSON")]
    json: PathBuf,

    /// Show verbose progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheet_export=warn".into()),
        )
        .init();

    let args = Cli::parse();
    let config = ExportConfig {
        input: args.input,
        report: args.report,
        json: args.json,
    };

    match cli::export(&config, args.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            ExitCode::FAILURE
        }
    }
}
