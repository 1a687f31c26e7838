//! # tablesift-cli
//!
//! Command-line interface for inspecting the tables of a workbook.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;
use tablesift_extract::TableExtractor;
use tracing_subscriber::EnvFilter;

/// tablesift - find and query the tables stacked on a worksheet
#[derive(Parser)]
#[command(name = "tablesift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Workbook to read (first sheet only)
    #[arg(
        short,
        long,
        env = "TABLESIFT_FILE",
        default_value = "data/capbudg.xls",
        global = true
    )]
    file: PathBuf,

    /// Output format (json, text)
    #[arg(long = "format", default_value = "text", global = true)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List detected tables
    Tables,
    /// List the row labels of a table
    Rows {
        /// Table name
        table: String,
    },
    /// Sum the numeric values of a row
    Sum {
        /// Table name
        table: String,
        /// Row label
        row: String,
    },
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// Plain listing (default)
    #[default]
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::debug!("Loading workbook {}", cli.file.display());
    let extractor = TableExtractor::open(&cli.file)
        .with_context(|| format!("Failed to load workbook: {}", cli.file.display()))?;
    tracing::debug!("Detected {} tables", extractor.len());

    println!("{}", run(&extractor, &cli.command, cli.format)?);
    Ok(())
}

/// Execute a command and render its result.
fn run(extractor: &TableExtractor, command: &Command, format: OutputFormat) -> Result<String> {
    let output = match (command, format) {
        (Command::Tables, OutputFormat::Json) => {
            json!({ "tables": extractor.table_names() }).to_string()
        }
        (Command::Tables, OutputFormat::Text) => listing(&extractor.table_names()),
        (Command::Rows { table }, format) => {
            let rows = extractor.row_names(table)?;
            match format {
                OutputFormat::Json => json!({ "table_name": table, "row_names": rows }).to_string(),
                OutputFormat::Text => listing(&rows),
            }
        }
        (Command::Sum { table, row }, format) => {
            let sum = extractor.row_sum(table, row)?;
            match format {
                OutputFormat::Json => {
                    json!({ "table_name": table, "row_name": row, "sum": sum }).to_string()
                }
                OutputFormat::Text => {
                    let label = format!("{}:", row.trim());
                    format!("{} {}", label.cyan(), sum)
                }
            }
        }
    };
    Ok(output)
}

fn listing(items: &[String]) -> String {
    if items.is_empty() {
        return "(none)".yellow().to_string();
    }
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablesift_extract::{CellValue, ExtractError, Grid};

    fn extractor() -> TableExtractor {
        TableExtractor::from_grid(&Grid::from_rows(vec![
            vec![CellValue::from("Rates"), CellValue::from("10%"), CellValue::from(5)],
            vec![CellValue::from("Notes"), CellValue::Empty],
        ]))
    }

    #[test]
    fn test_tables_json() {
        let out = run(&extractor(), &Command::Tables, OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"tables":["Rates"]}"#);
    }

    #[test]
    fn test_rows_text() {
        let command = Command::Rows {
            table: "Rates".to_string(),
        };
        let out = run(&extractor(), &command, OutputFormat::Text).unwrap();
        assert_eq!(out, "Rates\nNotes");
    }

    #[test]
    fn test_sum_json() {
        let command = Command::Sum {
            table: "Rates".to_string(),
            row: "Rates".to_string(),
        };
        let out = run(&extractor(), &command, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sum"], 15.0);
    }

    #[test]
    fn test_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tablesift",
            "rows",
            "Cash Flow",
            "--file",
            "model.xlsx",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("model.xlsx"));
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Command::Rows { ref table } if table == "Cash Flow"));
    }

    #[test]
    fn test_unknown_table() {
        let command = Command::Rows {
            table: "Missing".to_string(),
        };
        let err = run(&extractor(), &command, OutputFormat::Text).unwrap_err();
        let err = err.downcast::<ExtractError>().unwrap();
        assert!(err.is_not_found());
    }
}
