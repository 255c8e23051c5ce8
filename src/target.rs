use crate::log_entry::LogEntry;

/// Capability implemented by log destinations.
///
/// The host's log buffer collects entries and hands them over in one call
/// at flush time. Implementations own whatever they need to deliver them
/// and report nothing back.
pub trait LogTarget: Send {
    /// Deliver a batch of collected entries.
    fn flush(&mut self, entries: &[LogEntry]);
}
