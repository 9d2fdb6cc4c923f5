use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One analyzed text file, as served to clients.
///
/// Field declaration order is the serialization order for both renderings:
/// `file_name, sha256, file_size, word_count, unique_word_count, date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// The entry's base name within the scanned directory.
    pub file_name: String,
    /// Lowercase hex SHA-256 digest of the file's raw bytes.
    pub sha256: String,
    /// Byte length of the file.
    pub file_size: u64,
    /// Count of whitespace-delimited tokens in the file's text content.
    pub word_count: u64,
    /// Count of distinct tokens (exact, case-sensitive).
    pub unique_word_count: u64,
    /// Collection date in `YYYY-MM-DD` form, captured once per run and
    /// shared by every record in one response.
    pub date: String,
}

/// Settings for the collection pipeline, fixed at service startup.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// URL of the remote zip archive analyzed on every request.
    pub archive_url: String,
    /// Total request timeout applied to the archive fetch.
    pub timeout: Duration,
}
