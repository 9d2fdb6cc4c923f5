//! # Unpacking the Archive Payload
//!
//! This module turns the fetched zip payload into files on disk. The payload
//! is written to a temporary spool file, opened as a zip archive, and
//! extracted into the working directory of the current collection run with
//! its internal path structure preserved. The spool file is always removed
//! afterwards, on success and on failure.
//!
//! ## Submodules
//!
//! - **zip**: Contains the spool-and-extract logic.

mod zip;

pub use self::zip::extract_archive;
