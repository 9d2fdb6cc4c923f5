use crate::collect::FileRecord;
use crate::error::ExportError;

// Header row, written even when there are no records.
const FIELDS: [&str; 6] = [
    "file_name",
    "sha256",
    "file_size",
    "word_count",
    "unique_word_count",
    "date",
];

/// Renders records as CSV text.
///
/// The first line is always the header row with the fixed field names, even
/// for an empty record list; one line per record follows in collection
/// order. Quoting is standard CSV: any value containing the delimiter, the
/// quote character, or a newline is quoted and inner quotes doubled. No such
/// values are expected from archive entries, but the renderer does not rely
/// on that.
///
/// # Arguments
///
/// * `records` - The records of one collection run, in serving order.
///
/// # Returns
///
/// * `Ok(String)` - The CSV document.
/// * `Err(ExportError)` - A record failed to serialize.
pub fn render_csv(records: &[FileRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);

        writer.write_record(FIELDS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}
