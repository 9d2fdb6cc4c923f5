//! Archive Metadata Service Library
//!
//! This library fetches a remote zip archive, extracts its text files,
//! computes per-file metadata (SHA-256 digest, byte size, word statistics),
//! and renders the results as CSV or JSON for the HTTP layer to serve.

pub mod analyze;
pub mod collect;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod serve;
pub mod utils;
