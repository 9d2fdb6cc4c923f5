/// Raw analysis results for a single file, prior to record assembly.
///
/// The collector combines this with the entry's base name and the run's
/// collection date to build the served record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnalysis {
    /// Lowercase hex SHA-256 digest of the file's raw bytes.
    pub sha256: String,
    /// Byte length of the file as reported by the filesystem.
    pub file_size: u64,
    /// Count of whitespace-delimited tokens in the file's text content.
    pub word_count: u64,
    /// Count of distinct tokens (exact string match, case-sensitive).
    pub unique_word_count: u64,
}
