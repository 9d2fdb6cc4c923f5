use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

// Read size for streaming; the digest is independent of chunk size.
const CHUNK_SIZE: usize = 4096;

/// Computes the SHA-256 digest of a file's raw bytes.
///
/// The file is streamed through the hash accumulator in fixed-size chunks,
/// so arbitrarily large files never have to fit in memory.
///
/// # Arguments
///
/// * `path` - Path of the file to digest.
///
/// # Returns
///
/// A lowercase hexadecimal string representation of the SHA-256 digest, or
/// the I/O error that interrupted reading.
pub fn compute_file_digest(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_digest_of_empty_file_is_digest_of_zero_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "empty.txt", b"");
        assert_eq!(
            compute_file_digest(&path).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_matches_known_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "sample.txt", b"word11 word12     word13\tword14 word14");
        assert_eq!(
            compute_file_digest(&path).unwrap(),
            "c477511240ea0a17979a3b8e7acc30f13456cf97cfe58c41941aa6fe1ceeebc9"
        );
    }

    #[test]
    fn test_digest_is_64_hex_chars_for_content_larger_than_one_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "big.txt", &vec![b'a'; CHUNK_SIZE * 3 + 17]);
        let digest = compute_file_digest(&path).unwrap();
        assert_eq!(digest.len(), 64); // SHA-256 produces a 32-byte (64 hex char) digest
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(compute_file_digest(&dir.path().join("absent.txt")).is_err());
    }
}
