//! # Collecting Per-File Metadata
//!
//! This module orchestrates one collection run: fetch the configured
//! archive, extract it into a run-scoped working directory, analyze every
//! regular `.txt` file directly inside the scan root, and assemble the
//! records. A run is all-or-nothing — the first fetch, extract, or analysis
//! failure aborts it with no partial output — and leaves nothing behind on
//! disk.
//!
//! ## Usage
//!
//! The entry point is `collect_metadata`, which stamps records with today's
//! date; `collect_with_date` accepts an explicit date for deterministic
//! testing.
//!
//! ## Submodules
//!
//! - **metadata**: Contains the orchestration logic.
//! - **types**: Defines `FileRecord` and `CollectorConfig`.

mod metadata;
mod types;

pub use metadata::{collect_metadata, collect_with_date};
pub use types::{CollectorConfig, FileRecord};
