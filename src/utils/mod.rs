//! # Utility Functions for the Metadata Pipeline
//!
//! This module provides general helpers used throughout the application.
//!
//! ## Submodules
//!
//! - **digest**: Streaming SHA-256 digest calculation for files on disk.

mod digest;

pub use digest::compute_file_digest;
