//! Turns [`LogEntry`] values into [`FormattedRecord`]s.
//!
//! Formatting never fails: odd payloads are coerced to strings rather than
//! dropped.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone};
use serde_json::Value;

use crate::context::HostContext;
use crate::level::LevelNames;
use crate::log_entry::{LogEntry, Payload, StackFrame};

use super::record::FormattedRecord;

/// `strftime` pattern for the `timestamp` field.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Which optional fields to attach, and the values they carry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub enable_ip: bool,
    pub enable_trail: bool,
    pub enable_trace: bool,
    pub trail: String,
    pub cli_ip: String,
}

pub(crate) struct RecordFormatter {
    options: FieldOptions,
    level_names: Box<dyn LevelNames>,
    context: Box<dyn HostContext>,
}

impl RecordFormatter {
    pub(crate) fn new(
        options: FieldOptions,
        level_names: Box<dyn LevelNames>,
        context: Box<dyn HostContext>,
    ) -> Self {
        Self {
            options,
            level_names,
            context,
        }
    }

    pub(crate) fn trail(&self) -> &str {
        &self.options.trail
    }

    pub(crate) fn format(&self, entry: &LogEntry) -> FormattedRecord {
        let mut record = FormattedRecord {
            timestamp: format_timestamp(entry.timestamp),
            level: self.level_names.level_name(entry.level).into_owned(),
            category: entry.category.clone(),
            message: message_text(&entry.payload),
            tag: self.context.debug_tag(),
            code: error_code(&entry.payload),
            ..FormattedRecord::default()
        };
        if self.options.enable_ip {
            record.ip = Some(
                self.context
                    .remote_addr()
                    .unwrap_or_else(|| self.options.cli_ip.clone()),
            );
        }
        if self.options.enable_trail {
            record.trail = Some(self.options.trail.clone());
        }
        if self.options.enable_trace {
            record.trace = Some(trace_lines(entry.frames()));
        }
        record
    }
}

/// Render `timestamp` in the local time zone.
///
/// Instants chrono cannot represent are written as whole seconds since the
/// unix epoch instead.
pub fn format_timestamp(timestamp: SystemTime) -> String {
    let secs = unix_secs(timestamp);
    i64::try_from(secs)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map_or_else(
            || secs.to_string(),
            |local| local.format(TIMESTAMP_FORMAT).to_string(),
        )
}

/// Whole seconds relative to the epoch, rounded towards the past.
fn unix_secs(timestamp: SystemTime) -> i128 {
    match timestamp.duration_since(UNIX_EPOCH) {
        Ok(after) => i128::from(after.as_secs()),
        Err(before) => {
            let before = before.duration();
            -i128::from(before.as_secs()) - i128::from(before.subsec_nanos() > 0)
        }
    }
}

/// Derive the `message` field. Errors win over every other payload shape.
pub fn message_text(payload: &Payload) -> String {
    match payload {
        Payload::Error(err) => err.message.clone(),
        Payload::Text(text) => text.clone(),
        Payload::Structured(Value::String(text)) => text.clone(),
        Payload::Structured(value) => value.to_string(),
    }
}

fn error_code(payload: &Payload) -> Option<i64> {
    match payload {
        Payload::Error(err) => err.code,
        _ => None,
    }
}

/// `<file>(<line>)` for each frame, skipping frames without a file.
pub fn trace_lines(frames: &[StackFrame]) -> Vec<String> {
    frames
        .iter()
        .filter(|frame| !frame.file.is_empty())
        .map(|frame| format!("{}({})", frame.file, frame.line))
        .collect()
}
