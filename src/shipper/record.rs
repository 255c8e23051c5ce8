//! The normalised record shipped for every log entry.

use serde::{Deserialize, Serialize};

/// One entry after formatting.
///
/// Optional fields are omitted from the JSON object entirely when absent,
/// so the endpoint only ever sees the keys that were enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// `YYYY/MM/DD HH:MM:SS` in the host's local time zone.
    pub timestamp: String,
    pub level: String,
    pub category: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail: Option<String>,
    /// One flat `<file>(<line>)` string per frame that has a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<String>>,
}
