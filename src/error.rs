//! Error types for the metadata pipeline.
//!
//! Each pipeline stage has its own error kind so the caller can tell where a
//! collection run died: `FetchError` (transport or non-2xx status),
//! `ExtractError` (corrupt archive or workspace I/O), `AnalyzeError`
//! (unreadable extracted file). All three abort the run immediately; there is
//! no partial output. `CollectError` is the umbrella the HTTP layer sees.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while retrieving the remote archive payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (connect failure, timeout, broken
    /// transfer).
    #[error("request for {url} failed: {source}")]
    Transport {
        /// The archive URL that was requested.
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status {
        /// The archive URL that was requested.
        url: String,
        /// The unsuccessful response status.
        status: reqwest::StatusCode,
    },
}

/// Failure while unpacking the archive payload into the working directory.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The payload is not a readable zip archive.
    #[error("invalid or unreadable zip archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    /// Spooling the payload or writing extracted entries failed.
    #[error("workspace I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Failure while analyzing a single extracted file.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// An analysis task was cancelled or panicked.
    #[error("analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Failure while rendering records as CSV or JSON.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV rendering failed: {0}")]
    Csv(#[from] csv::Error),
    /// Flushing the CSV buffer failed.
    #[error("CSV I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The rendered CSV bytes were not valid UTF-8.
    #[error("CSV output was not valid UTF-8: {0}")]
    CsvUtf8(#[from] std::string::FromUtf8Error),
    /// JSON serialization failed.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure that aborts a collection run.
///
/// Wraps the stage errors so `collect_metadata` callers get one type while
/// the stage remains identifiable for logging.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}
