use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

use crate::http_client_properties::PROXY_ENDPOINT;
use crate::logging_utils::sanitize_credentials;
use crate::HttpConfigErr;

/// Proxy every request is routed through. Only constructed from an endpoint
/// that parsed as a URI (scheme required). Whether the URI is usable as a
/// proxy is left to the HTTP client builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    endpoint: String,
    url: Url,
}

impl ProxyConfig {
    pub fn from_endpoint(endpoint: &str) -> Result<Self, HttpConfigErr> {
        let url = Url::parse(endpoint)
            .map_err(|e| HttpConfigErr::parse_error(PROXY_ENDPOINT, endpoint, e.to_string()))?;

        Ok(ProxyConfig {
            endpoint: endpoint.to_string(),
            url,
        })
    }

    /// The endpoint exactly as it was supplied.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    // None for opaque URIs such as `urn:proxy` or `localhost:3128`
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    // explicit port, else the scheme's default (None for unknown schemes like socks5)
    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    pub fn has_credentials(&self) -> bool {
        !self.url.username().is_empty() || self.url.password().is_some()
    }
}

impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", sanitize_credentials(&self.endpoint))
    }
}

impl Serialize for ProxyConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
