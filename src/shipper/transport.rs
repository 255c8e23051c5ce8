//! The persistent HTTP connection used for delivery.
//!
//! [`Connector`] creates a [`Connection`] on the shipper's first send; the
//! shipper then keeps that connection for the rest of its life. The
//! production pair is [`UreqConnector`]/`UreqConnection`, built on a
//! pooled `ureq::Agent` with native TLS.

use std::{io, sync::Arc, time::Duration};

use ureq::{Agent, AgentBuilder};

use crate::error::DeliveryError;

/// Fixed client settings handed to the connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    /// Timeout for establishing a connection. `None` keeps the client default.
    pub connect_timeout: Option<Duration>,
    /// Timeout for the whole request. `None` means no limit.
    pub timeout: Option<Duration>,
}

/// An open HTTP client able to POST JSON bodies.
pub trait Connection: Send {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// Any response body is read and discarded.
    fn post_json(&mut self, url: &str, body: &str) -> Result<(), DeliveryError>;
}

/// Factory for [`Connection`]s.
pub trait Connector: Send {
    fn connect(&self, settings: &ClientSettings) -> Result<Box<dyn Connection>, DeliveryError>;
}

/// Connector producing keep-alive `ureq` agents.
///
/// TLS peer and hostname verification are always on; there is no switch
/// to turn them off.
#[derive(Clone, Copy, Debug, Default)]
pub struct UreqConnector;

impl Connector for UreqConnector {
    fn connect(&self, settings: &ClientSettings) -> Result<Box<dyn Connection>, DeliveryError> {
        let tls = native_tls::TlsConnector::new()
            .map_err(|err| DeliveryError::Connect(err.to_string()))?;
        let mut builder = AgentBuilder::new().tls_connector(Arc::new(tls));
        if let Some(connect) = settings.connect_timeout {
            builder = builder.timeout_connect(connect);
        }
        if let Some(total) = settings.timeout {
            builder = builder.timeout(total);
        }
        let agent = builder.build();
        Ok(Box::new(UreqConnection { agent }))
    }
}

struct UreqConnection {
    agent: Agent,
}

impl Connection for UreqConnection {
    fn post_json(&mut self, url: &str, body: &str) -> Result<(), DeliveryError> {
        let result = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_string(body);
        match result {
            Ok(response) => {
                drain(response);
                Ok(())
            }
            Err(ureq::Error::Status(code, response)) => {
                drain(response);
                Err(DeliveryError::Status(code))
            }
            Err(ureq::Error::Transport(err)) => Err(DeliveryError::Transport(err.to_string())),
        }
    }
}

/// Read the body to the end so the agent can return the socket to its pool.
fn drain(response: ureq::Response) {
    let _ = io::copy(&mut response.into_reader(), &mut io::sink());
}
