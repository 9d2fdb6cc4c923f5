//! Archive Metadata Service: Fetch, Analyze, and Serve Text-File Metadata
//!
//! This application serves per-file metadata for a remote zip archive of
//! text files. On each request it downloads the archive, extracts it into a
//! run-scoped working directory, analyzes every top-level `.txt` file
//! (SHA-256 digest, byte size, word statistics), and answers with CSV or
//! JSON depending on the route.
//!
//! ## Design Overview
//! - **Fetching**: Downloads the archive payload via the `fetch` module.
//! - **Extraction**: Unpacks the zip into a temporary directory via the
//!   `extract` module.
//! - **Analysis**: Computes digests and word statistics via the `analyze`
//!   module, orchestrated by `collect`.
//! - **Serving**: Renders CSV/JSON via the `export` module and exposes two
//!   GET routes via the `serve` module.
//!
//! ## Usage
//! 1. Configure the service using a `.env` file, environment variables, or
//!    CLI arguments:
//!    ```env
//!    BIND_ADDR=0.0.0.0:4000
//!    ARCHIVE_URL=https://github.com/BrainMonkey/sample-files/archive/refs/heads/main.zip
//!    FETCH_TIMEOUT_SECS=30
//!    ```
//! 2. Run the service:
//!    ```sh
//!    cargo run -- --bind 0.0.0.0:4000 --archive-url https://github.com/BrainMonkey/sample-files/archive/refs/heads/main.zip
//!    ```
//! 3. Request metadata:
//!    ```sh
//!    curl http://127.0.0.1:4000/get-metadata-csv
//!    curl http://127.0.0.1:4000/get-metadata-json
//!    ```
//! 4. Logs are controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run
//!    ```

use archive_metadata::collect::CollectorConfig;
use archive_metadata::serve;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use std::net::SocketAddr;
use std::time::Duration;

/// Command-line arguments for configuring the metadata service.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// Socket address to bind the HTTP server to.
  #[clap(long, env = "BIND_ADDR", default_value = "0.0.0.0:4000")]
  bind: SocketAddr,

  /// URL of the zip archive whose text files are analyzed on each request.
  #[clap(
    long,
    env = "ARCHIVE_URL",
    default_value = "https://github.com/BrainMonkey/sample-files/archive/refs/heads/main.zip"
  )]
  archive_url: String,

  /// Total request timeout for the archive fetch, in seconds.
  #[clap(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 30)]
  timeout_secs: u64,
}

/// Starts the metadata service.
///
/// This function:
/// 1. Initializes logging and loads environment variables.
/// 2. Parses command-line arguments into the collector configuration.
/// 3. Binds the HTTP server and serves the two metadata routes until the
///    process is stopped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialize logging
  env_logger::init();

  // Load environment variables from .env file (if present)
  dotenv().ok();

  // Parse command-line arguments
  let args = Args::parse();
  info!("Starting metadata service for archive: {}", args.archive_url);

  let config = CollectorConfig {
    archive_url: args.archive_url,
    timeout: Duration::from_secs(args.timeout_secs),
  };

  serve::run(args.bind, config).await
}
