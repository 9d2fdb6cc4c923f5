use crate::collect::FileRecord;
use crate::error::ExportError;

/// Renders records as a JSON array of objects.
///
/// Each object carries the six record fields with keys in declaration
/// order; the numeric fields are serialized as JSON numbers and everything
/// else as strings. Parsing the output back yields records equal to the
/// input, which the integration tests rely on.
///
/// # Arguments
///
/// * `records` - The records of one collection run, in serving order.
///
/// # Returns
///
/// * `Ok(String)` - The JSON document.
/// * `Err(ExportError)` - Serialization failed.
pub fn render_json(records: &[FileRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string(records)?)
}
