//! Connection configuration for the user API client.
//!
//! # Design
//! `ConnectionConfig` is declarative: host, protocol, and port are plain
//! values captured once at construction. [`ConnectionConfig::origin`] derives
//! the base URL the client prepends to every query path. A host that already
//! names its own port, or that carries a path prefix the way proxy hosts do,
//! is used verbatim; the `port` field only applies to bare hostnames.

use serde::{Deserialize, Serialize};

/// URL scheme for outbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the client sends its requests. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub protocol: Protocol,
    pub port: u16,
}

impl ConnectionConfig {
    pub fn new(host: &str, protocol: Protocol, port: u16) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            protocol,
            port,
        }
    }

    /// Base URL for requests, without a trailing slash.
    ///
    /// The configured `port` is appended only when the host is a bare
    /// hostname. A host with an explicit `:port` or a `/path` segment
    /// already determines where requests go.
    pub fn origin(&self) -> String {
        if self.host.contains(':') || self.host.contains('/') {
            format!("{}://{}", self.protocol, self.host)
        } else {
            format!("{}://{}:{}", self.protocol, self.host, self.port)
        }
    }
}
