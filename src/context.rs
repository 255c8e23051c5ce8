//! Values the host environment may supply while records are formatted.
//!
//! The shipper never looks these up globally; the host injects an
//! implementation of [`HostContext`] when the shipper is configured.

/// Environment lookups consulted for every formatted record.
pub trait HostContext: Send {
    /// Tag of the active debug session, if one is running.
    fn debug_tag(&self) -> Option<String> {
        None
    }

    /// Remote address of the request being served, if there is one.
    fn remote_addr(&self) -> Option<String> {
        None
    }
}

/// Context for processes with no request and no debug session, such as
/// command-line invocations.
#[derive(Clone, Copy, Debug, Default)]
pub struct CliContext;

impl HostContext for CliContext {}

/// Context with fixed values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticContext {
    pub debug_tag: Option<String>,
    pub remote_addr: Option<String>,
}

impl StaticContext {
    pub fn with_debug_tag(mut self, tag: impl Into<String>) -> Self {
        self.debug_tag = Some(tag.into());
        self
    }

    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = Some(addr.into());
        self
    }
}

impl HostContext for StaticContext {
    fn debug_tag(&self) -> Option<String> {
        self.debug_tag.clone()
    }

    fn remote_addr(&self) -> Option<String> {
        self.remote_addr.clone()
    }
}
