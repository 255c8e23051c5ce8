//! Endpoint configuration.
//!
//! [`ShipperConfig`] is plain data. It can be deserialised from the host's
//! configuration (keys use camelCase, e.g. `customerToken`) or assembled
//! through [`ShipperBuilder`](crate::ShipperBuilder). Either way it is
//! validated once, when the shipper is configured, and never changes
//! afterwards.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Default Loggly collector.
pub const DEFAULT_BASE_URL: &str = "https://logs-01.loggly.com";
/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Default total request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// Address reported when there is no request to take one from.
pub const DEFAULT_CLI_IP: &str = "0.0.0.0";
/// Required customer token length.
pub const CUSTOMER_TOKEN_LEN: usize = 36;

const INPUTS_SEGMENT: &str = "/inputs/";
const BULK_SEGMENT: &str = "/bulk/";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipperConfig {
    /// Loggly customer token (required, 36 bytes).
    pub customer_token: Option<String>,
    pub base_url: String,
    /// Send all records of an export in a single request.
    pub bulk: bool,
    /// Tags appended to the endpoint URL, in order.
    pub tags: Vec<String>,
    /// Trail identifier. Generated when absent or empty.
    pub trail: Option<String>,
    pub enable_ip: bool,
    pub enable_trail: bool,
    pub enable_trace: bool,
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
    /// Total request timeout in seconds.
    pub timeout: u64,
    /// Address reported when no request context is available.
    pub cli_ip: String,
}

impl Default for ShipperConfig {
    fn default() -> Self {
        Self {
            customer_token: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            bulk: false,
            tags: Vec::new(),
            trail: None,
            enable_ip: false,
            enable_trail: false,
            enable_trace: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout: DEFAULT_TIMEOUT_SECS,
            cli_ip: DEFAULT_CLI_IP.to_owned(),
        }
    }
}

impl ShipperConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json)
            .map_err(|err| ConfigurationError::InvalidConfig(err.to_string()))
    }

    /// Only the customer token is checked. Its length is counted in bytes.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let length = self.customer_token.as_deref().map_or(0, str::len);
        if length != CUSTOMER_TOKEN_LEN {
            return Err(ConfigurationError::InvalidToken { length });
        }
        Ok(())
    }

    /// Tags with duplicates removed, first occurrence wins.
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag.as_str());
            }
        }
        seen
    }

    /// Compute the target URL:
    /// `base_url + (/bulk/ | /inputs/) + token [+ /tag/<a,b>/]`.
    pub fn endpoint_url(&self) -> String {
        let segment = if self.bulk {
            BULK_SEGMENT
        } else {
            INPUTS_SEGMENT
        };
        let token = self.customer_token.as_deref().unwrap_or_default();
        let mut url = format!("{}{segment}{token}", self.base_url);
        let tags = self.unique_tags();
        if !tags.is_empty() {
            url.push_str("/tag/");
            url.push_str(&tags.join(","));
            url.push('/');
        }
        url
    }

    /// `None` when the connect timeout is zero, leaving the client default.
    pub fn connect_timeout(&self) -> Option<Duration> {
        non_zero_secs(self.connect_timeout)
    }

    /// `None` when the total timeout is zero, meaning no limit.
    pub fn timeout(&self) -> Option<Duration> {
        non_zero_secs(self.timeout)
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
