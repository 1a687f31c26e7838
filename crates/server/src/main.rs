//! # tablesift-server
//!
//! HTTP server answering table queries about a single workbook.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tablesift_extract::TableExtractor;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod routes;

use routes::create_router;

/// Serve the tables of a workbook over HTTP
#[derive(Parser, Debug)]
#[command(name = "tablesift-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Workbook to load (first sheet only)
    #[arg(short, long, env = "TABLESIFT_FILE", default_value = "data/capbudg.xls")]
    file: PathBuf,

    /// Address to bind
    #[arg(long, env = "TABLESIFT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP port to listen on
    #[arg(short, long, env = "TABLESIFT_PORT", default_value = "3000")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Loading workbook {}", cli.file.display());
    let extractor = TableExtractor::open(&cli.file)
        .with_context(|| format!("Failed to load workbook: {}", cli.file.display()))?;
    info!("Detected {} tables", extractor.len());

    let app = create_router(Arc::new(extractor));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("tablesift-server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tablesift-server"]).unwrap();
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.host, "0.0.0.0");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "tablesift-server",
            "--file",
            "model.xlsx",
            "--port",
            "8080",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("model.xlsx"));
        assert_eq!(cli.port, 8080);
        assert!(cli.verbose);
    }
}
