//! Error types.
//!
//! Only [`ConfigurationError`] ever reaches a caller. [`DeliveryError`] is
//! handed to the optional failure hook and nowhere else.

use thiserror::Error;

/// Errors that prevent a shipper from being configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The customer token is missing or not exactly 36 bytes long.
    #[error("customer token must be 36 bytes long (got {length})")]
    InvalidToken { length: usize },
    /// The configuration document could not be parsed.
    #[error("invalid shipper configuration: {0}")]
    InvalidConfig(String),
}

/// Why a single POST did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The HTTP client could not be created.
    #[error("could not open connection: {0}")]
    Connect(String),
    /// Network, TLS or timeout failure while sending.
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned status {0}")]
    Status(u16),
    /// The record could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialise(String),
}
