//! Companion client for the metadata service.
//!
//! Issues the two metadata requests against a running service instance:
//! the CSV response body is written to a local file, the JSON response body
//! is printed to stdout. Any non-2xx response is fatal; there is no retry.

use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the metadata client.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Base URL of a running metadata service.
    #[clap(long, env = "BASE_URL", default_value = "http://127.0.0.1:4000")]
    base_url: String,

    /// Path the CSV response body is written to.
    #[clap(long, env = "CSV_PATH", default_value = "metadata.csv")]
    output: PathBuf,
}

/// Fetches one route, failing hard on any non-2xx response.
async fn get_text(url: &str) -> anyhow::Result<String> {
    let body = reqwest::get(url)
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("request to {} failed", url))?
        .text()
        .await
        .with_context(|| format!("failed to read response body from {}", url))?;
    Ok(body)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let base_url = args.base_url.trim_end_matches('/');

    let csv_body = get_text(&format!("{}/get-metadata-csv", base_url)).await?;
    fs::write(&args.output, &csv_body)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("CSV metadata written to {}", args.output.display());

    let json_body = get_text(&format!("{}/get-metadata-json", base_url)).await?;
    println!("{}", json_body);

    Ok(())
}
