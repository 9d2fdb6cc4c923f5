use super::types::{CollectorConfig, FileRecord};
use crate::analyze::analyze_file;
use crate::error::{AnalyzeError, CollectError, ExtractError};
use crate::extract::extract_archive;
use crate::fetch::fetch_archive;
use chrono::{Local, NaiveDate};
use futures::future::join_all;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Runs one complete collection pipeline with today's date.
///
/// Fetches the configured archive, extracts it into a working directory
/// owned by this run, analyzes every eligible text file, and returns the
/// assembled records. Nothing persists between runs: the working directory
/// is uniquely named and removed on every exit path, and the metadata is
/// recomputed on each call.
///
/// # Arguments
///
/// * `config` - Archive URL and fetch timeout.
///
/// # Returns
///
/// * `Ok(Vec<FileRecord>)` - One record per eligible file, sorted by
///   `file_name`.
/// * `Err(CollectError)` - The first stage failure; no partial output is
///   ever produced.
///
/// # Examples
///
/// ```rust,no_run
/// use archive_metadata::collect::{collect_metadata, CollectorConfig};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), archive_metadata::error::CollectError> {
///     let config = CollectorConfig {
///         archive_url: "https://example.com/sample-files.zip".to_string(),
///         timeout: Duration::from_secs(30),
///     };
///     let records = collect_metadata(&config).await?;
///     println!("Collected {} record(s)", records.len());
///     Ok(())
/// }
/// ```
pub async fn collect_metadata(config: &CollectorConfig) -> Result<Vec<FileRecord>, CollectError> {
    collect_with_date(config, Local::now().date_naive()).await
}

/// Runs one complete collection pipeline with an explicit collection date.
///
/// The date is captured once and stamped onto every record of the run, so
/// all records in one response carry the same `YYYY-MM-DD` value. Taking the
/// date as a parameter keeps the pipeline deterministic for tests;
/// [`collect_metadata`] supplies today's date for production callers.
pub async fn collect_with_date(
    config: &CollectorConfig,
    date: NaiveDate,
) -> Result<Vec<FileRecord>, CollectError> {
    let payload = fetch_archive(&config.archive_url, config.timeout).await?;

    // Dropping `workdir` removes the run's working directory on every exit
    // path; concurrent runs never share extraction state.
    let workdir = tempfile::tempdir().map_err(ExtractError::Io)?;
    extract_archive(&payload, workdir.path())?;

    let scan_root = resolve_scan_root(workdir.path()).map_err(ExtractError::Io)?;
    let records = analyze_directory(&scan_root, date).await?;

    info!(
        "Collected metadata for {} file(s) from {}",
        records.len(),
        config.archive_url
    );
    Ok(records)
}

/// Resolves the directory whose immediate entries are enumerated.
///
/// A GitHub-style archive wraps its contents in a single top-level folder;
/// when extraction produced exactly one entry and it is a directory, that
/// directory is the scan root. Any other layout is scanned in place.
fn resolve_scan_root(extraction_root: &Path) -> io::Result<PathBuf> {
    let entries = fs::read_dir(extraction_root)?.collect::<Result<Vec<_>, _>>()?;
    if entries.len() == 1 && entries[0].file_type()?.is_dir() {
        return Ok(entries[0].path());
    }
    Ok(extraction_root.to_path_buf())
}

/// Analyzes every eligible file directly inside `scan_root`.
///
/// Eligible entries are regular files whose name ends in `.txt`; anything
/// else, including subdirectories, is skipped without descending. Analyses
/// are independent and read-only, so each runs as its own blocking task and
/// `join_all` collects them without losing enumeration order. Records are
/// then sorted by `file_name`; the filesystem guarantees nothing about
/// enumeration order.
async fn analyze_directory(
    scan_root: &Path,
    date: NaiveDate,
) -> Result<Vec<FileRecord>, AnalyzeError> {
    let date = date.format("%Y-%m-%d").to_string();

    let mut candidates = Vec::new();
    let listing = fs::read_dir(scan_root).map_err(|source| AnalyzeError::Io {
        path: scan_root.to_path_buf(),
        source,
    })?;
    for entry in listing {
        let entry = entry.map_err(|source| AnalyzeError::Io {
            path: scan_root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if path.is_file() && file_name.ends_with(".txt") {
            candidates.push((file_name, path));
        }
    }

    let tasks: Vec<_> = candidates
        .into_iter()
        .map(|(file_name, path)| {
            let date = date.clone();
            tokio::task::spawn_blocking(move || {
                analyze_file(&path).map(|analysis| FileRecord {
                    file_name,
                    sha256: analysis.sha256,
                    file_size: analysis.file_size,
                    word_count: analysis.word_count,
                    unique_word_count: analysis.unique_word_count,
                    date,
                })
            })
        })
        .collect();

    let mut records = Vec::new();
    for joined in join_all(tasks).await {
        records.push(joined??);
    }

    records.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(records)
}
