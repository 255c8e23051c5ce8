//! Builder for [`Shipper`](crate::Shipper).
//!
//! Collects the endpoint options along with the collaborators the host
//! injects (context, level names, connector, failure hook), validates them
//! and hands back a ready shipper.

use log::debug;

use crate::{
    config::ShipperConfig,
    context::{CliContext, HostContext},
    error::{ConfigurationError, DeliveryError},
    level::{DefaultLevelNames, LevelNames},
    shipper::{
        ClientSettings, Connector, FailureHook, FieldOptions, RecordFormatter, Shipper,
        UreqConnector,
    },
    trail::resolve_trail,
};

macro_rules! flag_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, enabled: bool) -> Self {
            self.config.$field = enabled;
            self
        }
    };
}

/// Builder for constructing [`Shipper`] instances.
#[derive(Default)]
pub struct ShipperBuilder {
    config: ShipperConfig,
    context: Option<Box<dyn HostContext>>,
    level_names: Option<Box<dyn LevelNames>>,
    connector: Option<Box<dyn Connector>>,
    on_failure: Option<FailureHook>,
}

impl ShipperBuilder {
    /// Create a builder with default options and no customer token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ShipperConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the customer token (required, 36 bytes).
    pub fn with_customer_token(mut self, token: impl Into<String>) -> Self {
        self.config.customer_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    flag_setter!(
        #[doc = "Send each export as one newline-delimited request."]
        with_bulk,
        bulk
    );
    flag_setter!(
        #[doc = "Attach the request's remote address (or the CLI fallback)."]
        with_ip,
        enable_ip
    );
    flag_setter!(
        #[doc = "Attach the trail identifier."]
        with_trail_logging,
        enable_trail
    );
    flag_setter!(
        #[doc = "Attach `<file>(<line>)` stack frames."]
        with_trace,
        enable_trace
    );

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.tags.push(tag.into());
        self
    }

    /// Use a fixed trail instead of generating one.
    pub fn with_trail(mut self, trail: impl Into<String>) -> Self {
        self.config.trail = Some(trail.into());
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.config.connect_timeout = secs;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = secs;
        self
    }

    /// Address reported when no request context is available.
    pub fn with_cli_ip(mut self, ip: impl Into<String>) -> Self {
        self.config.cli_ip = ip.into();
        self
    }

    pub fn with_context(mut self, context: impl HostContext + 'static) -> Self {
        self.context = Some(Box::new(context));
        self
    }

    pub fn with_level_names(mut self, names: impl LevelNames + 'static) -> Self {
        self.level_names = Some(Box::new(names));
        self
    }

    /// Replace the HTTP connector.
    pub fn with_connector(mut self, connector: impl Connector + 'static) -> Self {
        self.connector = Some(Box::new(connector));
        self
    }

    /// Observe failed sends. The hook is informational only.
    pub fn on_delivery_failure(
        mut self,
        hook: impl FnMut(&DeliveryError) + Send + 'static,
    ) -> Self {
        self.on_failure = Some(Box::new(hook));
        self
    }

    pub fn config(&self) -> &ShipperConfig {
        &self.config
    }

    /// Validate the options and construct the shipper.
    pub fn build(self) -> Result<Shipper, ConfigurationError> {
        self.config.validate()?;

        let url = self.config.endpoint_url();
        let settings = ClientSettings {
            connect_timeout: self.config.connect_timeout(),
            timeout: self.config.timeout(),
        };
        let options = FieldOptions {
            enable_ip: self.config.enable_ip,
            enable_trail: self.config.enable_trail,
            enable_trace: self.config.enable_trace,
            trail: resolve_trail(self.config.trail.as_deref()),
            cli_ip: self.config.cli_ip.clone(),
        };
        let formatter = RecordFormatter::new(
            options,
            self.level_names
                .unwrap_or_else(|| Box::new(DefaultLevelNames)),
            self.context.unwrap_or_else(|| Box::new(CliContext)),
        );
        debug!(
            "loggly shipper configured for {} (bulk: {}, tags: {})",
            self.config.base_url,
            self.config.bulk,
            self.config.unique_tags().len()
        );
        Ok(Shipper::from_parts(
            url,
            self.config.bulk,
            settings,
            formatter,
            self.connector.unwrap_or_else(|| Box::new(UreqConnector)),
            self.on_failure,
        ))
    }
}

impl std::fmt::Debug for ShipperBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipperBuilder")
            .field("base_url", &self.config.base_url)
            .field("bulk", &self.config.bulk)
            .field("tags", &self.config.tags)
            .field("has_context", &self.context.is_some())
            .field("has_connector", &self.connector.is_some())
            .finish()
    }
}
