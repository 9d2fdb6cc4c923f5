use crate::error::ExtractError;
use log::info;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use zip::ZipArchive;

/// Unpacks an archive payload into `destination`.
///
/// The payload is spooled to a temporary file, opened as a zip archive, and
/// extracted with its internal path structure preserved, so a top-level
/// directory entry in the archive becomes a subdirectory under
/// `destination`. The spool file is unlinked when it goes out of scope,
/// whether extraction succeeded or not. Extraction is not atomic: a failure
/// midway can leave a partially populated destination behind, and callers
/// scope the destination directory to a single collection run.
///
/// # Arguments
///
/// * `archive_bytes` - The raw zip payload.
/// * `destination` - Directory the entries are extracted into.
///
/// # Returns
///
/// * `Ok(())` - All entries extracted.
/// * `Err(ExtractError)` - The payload is not a valid zip archive, or
///   extraction I/O failed.
pub fn extract_archive(archive_bytes: &[u8], destination: &Path) -> Result<(), ExtractError> {
    let mut spool = NamedTempFile::new()?;
    spool.write_all(archive_bytes)?;
    spool.flush()?;

    let mut archive = ZipArchive::new(spool.reopen()?)?;
    archive.extract(destination)?;
    info!(
        "Extracted {} entries into {}",
        archive.len(),
        destination.display()
    );
    Ok(())
}
