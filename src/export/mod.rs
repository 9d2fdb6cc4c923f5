//! # Rendering Records for Clients
//!
//! This module turns one run's records into the two textual representations
//! the service exposes. Both renderings use the same fixed field order:
//! `file_name, sha256, file_size, word_count, unique_word_count, date`.
//!
//! ## Submodules
//!
//! - **csv**: CSV document with a header row and generic quoting.
//! - **json**: JSON array of objects with numeric fields as numbers.

mod csv;
mod json;

pub use self::csv::render_csv;
pub use self::json::render_json;
