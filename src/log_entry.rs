//! Log entry representation handed to the shipper at flush time.
//!
//! An entry mirrors what the host logging framework collects: a payload,
//! a severity, a category, the time it was logged and the stack frames
//! captured alongside it.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::level::Level;

/// A single frame of a captured stack trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackFrame {
    /// Source file of the frame. Empty when the frame has no file location
    /// (for example an internal or native call).
    pub file: String,
    /// Line number in `file`.
    pub line: u32,
}

impl StackFrame {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// An error object logged directly as the entry payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorPayload {
    pub message: String,
    pub code: Option<i64>,
    /// Frames captured where the error was raised. They take the place of
    /// the entry's own frames when the entry is formatted.
    pub frames: Vec<StackFrame>,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }

    /// Capture any [`std::error::Error`] using its `Display` output.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::new(err.to_string())
    }
}

/// What was logged.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Text(String),
    Error(ErrorPayload),
    /// Arrays, objects or any other JSON value.
    Structured(serde_json::Value),
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ErrorPayload> for Payload {
    fn from(value: ErrorPayload) -> Self {
        Self::Error(value)
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub payload: Payload,
    pub level: Level,
    pub category: String,
    /// Time the entry was logged.
    pub timestamp: SystemTime,
    pub traces: Vec<StackFrame>,
}

impl LogEntry {
    /// Construct an entry stamped with the current time and no frames.
    pub fn new(payload: impl Into<Payload>, level: Level, category: &str) -> Self {
        Self {
            payload: payload.into(),
            level,
            category: category.to_owned(),
            timestamp: SystemTime::now(),
            traces: Vec::new(),
        }
    }

    /// Set the timestamp from whole seconds since the unix epoch.
    ///
    /// The timestamp is left unchanged if `secs` is past what the platform
    /// clock can hold.
    pub fn at_unix_secs(mut self, secs: u64) -> Self {
        if let Some(timestamp) = UNIX_EPOCH.checked_add(Duration::from_secs(secs)) {
            self.timestamp = timestamp;
        }
        self
    }

    pub fn with_traces(mut self, traces: Vec<StackFrame>) -> Self {
        self.traces = traces;
        self
    }

    /// Frames to report for this entry: the error's own frames for error
    /// payloads, otherwise the frames collected with the entry.
    pub fn frames(&self) -> &[StackFrame] {
        match &self.payload {
            Payload::Error(err) => &err.frames,
            _ => &self.traces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_frames_replace_entry_traces() {
        let err = ErrorPayload::new("boom").with_frames(vec![StackFrame::new("err.rs", 7)]);
        let entry = LogEntry::new(err, Level::Error, "app")
            .with_traces(vec![StackFrame::new("caller.rs", 1)]);
        assert_eq!(entry.frames(), &[StackFrame::new("err.rs", 7)]);
    }

    #[test]
    fn text_entries_keep_their_traces() {
        let entry =
            LogEntry::new("hi", Level::Info, "app").with_traces(vec![StackFrame::new("a.rs", 3)]);
        assert_eq!(entry.frames().len(), 1);
    }

    #[test]
    fn from_error_uses_display() {
        let io = std::io::Error::other("disk on fire");
        let payload = ErrorPayload::from_error(&io);
        assert_eq!(payload.message, "disk on fire");
        assert_eq!(payload.code, None);
    }

    #[test]
    fn at_unix_secs_sets_timestamp() {
        let entry = LogEntry::new("x", Level::Info, "app").at_unix_secs(1_700_000_000);
        assert_eq!(
            entry.timestamp.duration_since(UNIX_EPOCH).unwrap(),
            Duration::from_secs(1_700_000_000)
        );
    }

    #[test]
    fn unrepresentable_unix_secs_keep_previous_timestamp() {
        let entry = LogEntry::new("x", Level::Info, "app").at_unix_secs(1_700_000_000);
        let before = entry.timestamp;
        assert_eq!(entry.at_unix_secs(u64::MAX).timestamp, before);
    }
}
