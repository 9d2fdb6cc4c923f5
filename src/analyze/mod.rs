//! # Analyzing Extracted Files
//!
//! This module computes the per-file measurements the service reports: a
//! SHA-256 digest over the file's raw bytes, its byte length, and word
//! statistics over its text content. Analysis is read-only and independent
//! per file, which is what lets the collector run it concurrently.
//!
//! ## Usage
//!
//! The entry point is `analyze_file`, which takes a path and returns a
//! `FileAnalysis`.
//!
//! ## Submodules
//!
//! - **file**: Contains the digest and tokenization logic.
//! - **types**: Defines the analysis result structure.

mod file;
mod types;

pub use file::analyze_file;
pub use types::FileAnalysis;
