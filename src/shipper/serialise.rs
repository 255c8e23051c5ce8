//! JSON encoding of formatted records.

use std::io;

use super::record::FormattedRecord;

/// Separator between records in a bulk body.
pub const BULK_SEPARATOR: &str = "\n";

/// Serialise a record to a single JSON object.
///
/// [`FormattedRecord`] always encodes as an object, even when every
/// optional field is absent.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn serialise_record(record: &FormattedRecord) -> io::Result<String> {
    serde_json::to_string(record).map_err(io::Error::other)
}

/// Join serialised records into one newline-delimited bulk body.
pub fn bulk_body(records: &[String]) -> String {
    records.join(BULK_SEPARATOR)
}
