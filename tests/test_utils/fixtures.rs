//! Shared fixtures for shipper integration tests.

use loggly_shipper::{Level, LogEntry, ShipperBuilder};
use rstest::fixture;

/// A well-formed 36 byte customer token.
pub const TOKEN: &str = "b1a2c3d4-e5f6-4788-9900-aabbccddeeff";

/// Builder with a valid token and nothing else configured.
#[fixture]
pub fn builder() -> ShipperBuilder {
    ShipperBuilder::new().with_customer_token(TOKEN)
}

/// An info entry logged at a fixed instant.
pub fn info(message: &str) -> LogEntry {
    LogEntry::new(message, Level::Info, "app").at_unix_secs(1_700_000_000)
}
