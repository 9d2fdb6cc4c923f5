use super::types::FileAnalysis;
use crate::error::AnalyzeError;
use crate::utils::compute_file_digest;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Analyzes a single extracted file.
///
/// Produces the file's SHA-256 digest (streamed over its raw bytes), its
/// byte length, and its word statistics. Words are maximal runs of
/// non-whitespace characters; splitting on whitespace runs discards the
/// empty tokens that leading, trailing, or consecutive whitespace would
/// otherwise produce. Uniqueness is exact and case-sensitive, so
/// `unique_word_count <= word_count` always holds.
///
/// # Arguments
///
/// * `path` - Path of the file to analyze.
///
/// # Returns
///
/// * `Ok(FileAnalysis)` - Digest, size, and word statistics.
/// * `Err(AnalyzeError)` - The file could not be opened or read (including
///   content that is not valid UTF-8 text); the containing collection run
///   aborts with no partial results.
///
/// # Examples
///
/// ```rust
/// use archive_metadata::analyze::analyze_file;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("sample.txt");
/// std::fs::write(&path, "one two  two").unwrap();
///
/// let analysis = analyze_file(&path).unwrap();
/// assert_eq!(analysis.word_count, 3);
/// assert_eq!(analysis.unique_word_count, 2);
/// ```
pub fn analyze_file(path: &Path) -> Result<FileAnalysis, AnalyzeError> {
    let sha256 = compute_file_digest(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_size = fs::metadata(path)
        .map_err(|source| AnalyzeError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let text = fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<&str> = text.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();

    Ok(FileAnalysis {
        sha256,
        file_size,
        word_count: words.len() as u64,
        unique_word_count: unique.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Tests tokenization across mixed whitespace runs.
    #[test]
    fn test_counts_tokens_across_whitespace_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "mixed.txt", "word11 word12     word13\tword14 word14");

        let analysis = analyze_file(&path).unwrap();

        assert_eq!(analysis.word_count, 5);
        assert_eq!(analysis.unique_word_count, 4);
        assert_eq!(analysis.file_size, 38);
        assert_eq!(
            analysis.sha256,
            "c477511240ea0a17979a3b8e7acc30f13456cf97cfe58c41941aa6fe1ceeebc9"
        );
    }

    /// Tests that leading, trailing, and blank-line whitespace never produce
    /// empty tokens.
    #[test]
    fn test_multiline_content_with_padding() {
        let content = "\nword11 word12     word13\tword14\n   word21 word22            \
                       word22              word22\nword31 word32\nword41\n\n            ";
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "padded.txt", content);

        let analysis = analyze_file(&path).unwrap();

        assert_eq!(analysis.word_count, 11);
        assert_eq!(analysis.unique_word_count, 9);
    }

    /// Tests the empty-file edge case.
    #[test]
    fn test_empty_file_has_zero_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "empty.txt", "");

        let analysis = analyze_file(&path).unwrap();

        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.unique_word_count, 0);
        assert_eq!(analysis.file_size, 0);
        assert_eq!(
            analysis.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    /// Tests that tokens are compared case-sensitively.
    #[test]
    fn test_uniqueness_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "case.txt", "Word word WORD word");

        let analysis = analyze_file(&path).unwrap();

        assert_eq!(analysis.word_count, 4);
        assert_eq!(analysis.unique_word_count, 3);
    }

    /// Tests that an unreadable path surfaces as an analysis error.
    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = analyze_file(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(AnalyzeError::Io { .. })));
    }
}
