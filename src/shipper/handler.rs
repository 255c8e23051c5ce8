//! Public shipper type exported by the crate.

use log::debug;

use crate::{
    builder::ShipperBuilder,
    config::ShipperConfig,
    error::{ConfigurationError, DeliveryError},
    log_entry::LogEntry,
    target::LogTarget,
};

use super::{
    format::RecordFormatter,
    record::FormattedRecord,
    serialise::{bulk_body, serialise_record},
    transport::{ClientSettings, Connection, Connector},
};

/// Callback observing failed sends. It cannot influence delivery.
pub type FailureHook = Box<dyn FnMut(&DeliveryError) + Send>;

/// Formats log entries and posts them to the configured endpoint.
///
/// A `Shipper` only exists once its configuration has been validated, so
/// every instance is ready to export. Delivery is best effort: failures are
/// passed to the optional failure hook and otherwise ignored.
pub struct Shipper {
    url: String,
    bulk: bool,
    settings: ClientSettings,
    formatter: RecordFormatter,
    connector: Box<dyn Connector>,
    connection: Option<Box<dyn Connection>>,
    on_failure: Option<FailureHook>,
}

impl Shipper {
    /// Validate `config` and construct a shipper with the default
    /// collaborators.
    pub fn configure(config: ShipperConfig) -> Result<Self, ConfigurationError> {
        ShipperBuilder::from_config(config).build()
    }

    pub fn builder() -> ShipperBuilder {
        ShipperBuilder::new()
    }

    pub(crate) fn from_parts(
        url: String,
        bulk: bool,
        settings: ClientSettings,
        formatter: RecordFormatter,
        connector: Box<dyn Connector>,
        on_failure: Option<FailureHook>,
    ) -> Self {
        Self {
            url,
            bulk,
            settings,
            formatter,
            connector,
            connection: None,
            on_failure,
        }
    }

    /// The endpoint every request is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Trail identifier attached to records when trail logging is enabled.
    pub fn trail(&self) -> &str {
        self.formatter.trail()
    }

    pub fn is_bulk(&self) -> bool {
        self.bulk
    }

    /// Whether the persistent connection has been opened.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn format_message(&self, entry: &LogEntry) -> FormattedRecord {
        self.formatter.format(entry)
    }

    /// Format `entries` and post them.
    ///
    /// In bulk mode all records go out in a single newline-delimited
    /// request; otherwise each record is posted on its own, in order. An
    /// empty slice does nothing at all.
    pub fn export(&mut self, entries: &[LogEntry]) {
        if entries.is_empty() {
            return;
        }
        let payloads = self.serialise_entries(entries);
        if payloads.is_empty() {
            return;
        }
        let bodies = if self.bulk {
            vec![bulk_body(&payloads)]
        } else {
            payloads
        };

        if self.connection.is_none() {
            match self.connector.connect(&self.settings) {
                Ok(connection) => {
                    debug!("loggly shipper opened connection");
                    self.connection = Some(connection);
                }
                Err(err) => {
                    notify(&mut self.on_failure, &err);
                    return;
                }
            }
        }
        let Some(connection) = self.connection.as_mut() else {
            return;
        };
        for body in &bodies {
            if let Err(err) = connection.post_json(&self.url, body) {
                notify(&mut self.on_failure, &err);
            }
        }
    }

    fn serialise_entries(&mut self, entries: &[LogEntry]) -> Vec<String> {
        let mut payloads = Vec::with_capacity(entries.len());
        for entry in entries {
            match serialise_record(&self.formatter.format(entry)) {
                Ok(payload) => payloads.push(payload),
                Err(err) => {
                    notify(
                        &mut self.on_failure,
                        &DeliveryError::Serialise(err.to_string()),
                    );
                }
            }
        }
        payloads
    }

    /// Release the connection. Later exports open a fresh one; calling
    /// this again is a no-op.
    pub fn close(&mut self) {
        if self.connection.take().is_some() {
            debug!("loggly shipper released connection");
        }
    }
}

fn notify(hook: &mut Option<FailureHook>, err: &DeliveryError) {
    if let Some(hook) = hook.as_mut() {
        hook(err);
    }
}

impl LogTarget for Shipper {
    fn flush(&mut self, entries: &[LogEntry]) {
        self.export(entries);
    }
}

impl Drop for Shipper {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Shipper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shipper")
            .field("bulk", &self.bulk)
            .field("settings", &self.settings)
            .field("connected", &self.connection.is_some())
            .finish()
    }
}
