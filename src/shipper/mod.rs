//! Formatting and HTTP delivery of log entries.
//!
//! This module defines [`Shipper`], which turns
//! [`LogEntry`](crate::log_entry::LogEntry) values into normalised
//! [`FormattedRecord`]s, encodes them as JSON objects and posts them to a
//! Loggly-style endpoint over a single persistent connection.
//!
//! # Delivery modes
//!
//! - **Inputs** (default): one `POST` per record, sent in order.
//! - **Bulk**: one `POST` per export, records joined by `\n`.
//!
//! # Failure semantics
//!
//! Delivery is fire and forget. Connection errors, timeouts and non-2xx
//! responses are never retried and never returned to the caller; an
//! optional hook registered with
//! [`ShipperBuilder::on_delivery_failure`](crate::ShipperBuilder::on_delivery_failure)
//! may observe them.

mod format;
mod handler;
mod record;
mod serialise;
mod transport;


pub use format::{FieldOptions, TIMESTAMP_FORMAT, format_timestamp, message_text, trace_lines};
pub(crate) use format::RecordFormatter;
pub use handler::{FailureHook, Shipper};
pub use record::FormattedRecord;
pub use serialise::{BULK_SEPARATOR, bulk_body, serialise_record};
pub use transport::{ClientSettings, Connection, Connector, UreqConnector};
