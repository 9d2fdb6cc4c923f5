//! # Fetching the Remote Archive
//!
//! This module retrieves the zip archive payload from its configured URL.
//! The fetch is a single GET request bounded by connect and total timeouts;
//! a transport failure or non-2xx response aborts the collection run that
//! requested it. The payload is returned in memory and handed to the
//! extraction stage.
//!
//! ## Usage
//!
//! The entry point is `fetch_archive`, which takes the archive URL and a
//! total request timeout.
//!
//! ## Submodules
//!
//! - **archive**: Contains the HTTP download logic.

mod archive;

pub use archive::fetch_archive;
