//! Ship structured log entries to a Loggly-style HTTP endpoint.
//!
//! Build a [`Shipper`] from a [`ShipperConfig`] or a [`ShipperBuilder`],
//! then hand it batches of [`LogEntry`] values through [`Shipper::export`]
//! (or the [`LogTarget`] capability).

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod level;
pub mod log_entry;
pub mod shipper;
pub mod target;
pub mod trail;

pub use builder::ShipperBuilder;
pub use config::ShipperConfig;
pub use context::{CliContext, HostContext, StaticContext};
pub use error::{ConfigurationError, DeliveryError};
pub use level::{DefaultLevelNames, Level, LevelNames};
pub use log_entry::{ErrorPayload, LogEntry, Payload, StackFrame};
pub use shipper::{
    ClientSettings, Connection, Connector, FailureHook, FormattedRecord, Shipper, UreqConnector,
};
pub use target::LogTarget;
