//! FILENAME: app/src/main.rs
// PURPOSE: Command line front end for normalizing a ledger workbook.

use std::path::PathBuf;
use std::process::ExitCode;

use app_lib::logging::{log_error, log_info};
use app_lib::{init_logging, AppConfig, AppError, LedgerSession, LoadSummary, Preview};
use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ledger-normalizer")]
#[command(about = "Strip title and summary rows from a ledger sheet and derive a LEDGER HEAD column")]
struct Cli {
    /// Input workbook (xlsx, xlsm, xlsb, xls, ods)
    input: PathBuf,

    /// Output workbook; nothing is written without it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column to add if missing (repeatable)
    #[arg(long = "add-column", value_name = "NAME")]
    add_columns: Vec<String>,

    /// Column to inspect for LEDGER HEAD, in label order (repeatable)
    #[arg(long = "ledger-column", value_name = "NAME")]
    ledger_columns: Vec<String>,

    /// Derive LEDGER HEAD; uses the suggested columns when none are given
    #[arg(long)]
    derive: bool,

    /// Rows to show in the preview (defaults to the configured count, 0 hides it)
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write log lines to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    summary: LoadSummary,
    columns_added: usize,
    ledger_columns: Vec<String>,
    rows_labelled: usize,
    preview: Option<Preview>,
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("CLI", "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };
    let mut session = LedgerSession::new(config);

    let summary = session.load(&cli.input)?;

    let columns_added = if cli.add_columns.is_empty() {
        0
    } else {
        session.add_columns(cli.add_columns.as_slice())?
    };

    let ledger_columns = if !cli.ledger_columns.is_empty() {
        cli.ledger_columns.clone()
    } else if cli.derive {
        session.suggested_ledger_columns()?
    } else {
        Vec::new()
    };

    let rows_labelled = if cli.derive || !ledger_columns.is_empty() {
        session.derive_ledger_head(ledger_columns.as_slice())?
    } else {
        0
    };

    let preview = match cli.preview {
        Some(0) => None,
        Some(rows) => Some(session.preview(rows)?),
        None => Some(session.default_preview()?),
    };

    if let Some(output) = &cli.output {
        session.save(output)?;
        log_info!("CLI", "File saved successfully: {}", output.display());
    }

    let report = Report {
        summary,
        columns_added,
        ledger_columns,
        rows_labelled,
        preview,
        output: cli.output,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    let summary = &report.summary;
    println!("{}", summary.message);
    println!("Sheets: {}", summary.sheet_names.join(", "));
    match summary.header_row {
        Some(row) => println!("Main header row: {}", row),
        None => println!("Main header row: not found"),
    }
    println!(
        "Header rows: {}  Footer rows: {}  Data rows: {}",
        summary.header_rows, summary.footer_rows, summary.data_rows
    );

    if report.columns_added > 0 {
        println!("Added {} column(s)", report.columns_added);
    }
    if !report.ledger_columns.is_empty() {
        println!(
            "LEDGER HEAD derived for {} row(s) from: {}",
            report.rows_labelled,
            report.ledger_columns.join(", ")
        );
    }

    if let Some(preview) = &report.preview {
        println!();
        println!("{}", preview.render());
        if preview.total_rows > preview.rows.len() {
            println!("... {} more row(s)", preview.total_rows - preview.rows.len());
        }
    }

    if let Some(output) = &report.output {
        println!("Saved to {}", output.display());
    }
}
