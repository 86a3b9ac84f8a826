use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::http_client_properties::{
    PropertyBag, CONNECTION_TIMEOUT_MS, PROXY_ENDPOINT, RECOGNIZED_KEYS, SOCKET_TIMEOUT_MS,
};
use crate::property_util::{property_as_nullable_u64, property_as_string};
use crate::{
    log_d, log_w, serialize_if_not_none, HttpClientBuilder, HttpConfigErr, ProxyConfig,
    SdkClientBuilder,
};

const TAG: &str = stringify!(HttpClientConfigurator);

/// HTTP client settings read from a property bag.
/// A field is `Some` only when its key was present and parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHttpConfig {
    pub connection_timeout_ms: Option<u64>,
    pub socket_timeout_ms: Option<u64>,
    pub proxy_endpoint: Option<ProxyConfig>,
}

impl ParsedHttpConfig {
    pub fn from_properties(properties: &PropertyBag) -> Result<Self, HttpConfigErr> {
        Ok(ParsedHttpConfig {
            connection_timeout_ms: property_as_nullable_u64(properties, CONNECTION_TIMEOUT_MS)?,
            socket_timeout_ms: property_as_nullable_u64(properties, SOCKET_TIMEOUT_MS)?,
            proxy_endpoint: property_as_string(properties, PROXY_ENDPOINT)
                .map(ProxyConfig::from_endpoint)
                .transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.connection_timeout_ms.is_none()
            && self.socket_timeout_ms.is_none()
            && self.proxy_endpoint.is_none()
    }
}

impl Serialize for ParsedHttpConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ParsedHttpConfig", 3)?;
        serialize_if_not_none!(state, CONNECTION_TIMEOUT_MS, &self.connection_timeout_ms);
        serialize_if_not_none!(state, SOCKET_TIMEOUT_MS, &self.socket_timeout_ms);
        serialize_if_not_none!(state, PROXY_ENDPOINT, &self.proxy_endpoint);
        state.end()
    }
}

/// Applies timeout and proxy properties to an HTTP client builder.
///
/// Missing properties leave the builder's defaults alone. A malformed one fails
/// [`HttpClientConfigurator::create`] outright, it is never replaced by a default.
///
/// ```
/// use s3tables_http::{HttpClientConfigurator, PropertyBag, ReqwestHttpClientBuilder};
/// use std::time::Duration;
///
/// let properties = PropertyBag::from([
///     ("connection-timeout-ms".to_string(), "500".to_string()),
///     ("proxy-endpoint".to_string(), "http://proxy.example:8080".to_string()),
/// ]);
///
/// let configurator = HttpClientConfigurator::create(&properties).unwrap();
/// let mut builder = ReqwestHttpClientBuilder::new();
/// configurator.apply(&mut builder);
///
/// assert_eq!(builder.get_connection_timeout(), Some(Duration::from_millis(500)));
/// assert_eq!(builder.get_socket_timeout(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfigurator {
    config: ParsedHttpConfig,
}

impl HttpClientConfigurator {
    pub fn create(properties: &PropertyBag) -> Result<Self, HttpConfigErr> {
        let config = match ParsedHttpConfig::from_properties(properties) {
            Ok(config) => config,
            Err(e) => {
                log_w!(TAG, "Invalid http client properties: {}", e);
                return Err(e);
            }
        };

        let ignored = properties
            .keys()
            .filter(|k| !RECOGNIZED_KEYS.contains(&k.as_str()))
            .count();
        log_d!(
            TAG,
            "Parsed http client properties {} ({} unrecognized keys ignored)",
            serde_json::to_string(&config).unwrap_or_default(),
            ignored
        );

        Ok(HttpClientConfigurator { config })
    }

    #[must_use]
    pub fn builder() -> HttpClientConfiguratorBuilder {
        HttpClientConfiguratorBuilder::default()
    }

    pub fn config(&self) -> &ParsedHttpConfig {
        &self.config
    }

    pub fn apply<B>(&self, builder: &mut B)
    where
        B: HttpClientBuilder + ?Sized,
    {
        if let Some(ms) = self.config.connection_timeout_ms {
            builder.connection_timeout(Duration::from_millis(ms));
        }

        if let Some(ms) = self.config.socket_timeout_ms {
            builder.socket_timeout(Duration::from_millis(ms));
        }

        if let Some(proxy) = &self.config.proxy_endpoint {
            builder.proxy_configuration(proxy.clone());
        }
    }

    /// Configures a fresh HTTP client builder and hands it to `client_builder`.
    pub fn configure_sdk_client_builder<T>(&self, client_builder: &mut T)
    where
        T: SdkClientBuilder,
    {
        let mut http_client_builder = T::HttpBuilder::default();
        self.apply(&mut http_client_builder);
        client_builder.http_client_builder(http_client_builder);
    }
}

#[derive(Default)]
pub struct HttpClientConfiguratorBuilder {
    inner: ParsedHttpConfig,
}

impl HttpClientConfiguratorBuilder {
    #[must_use]
    pub fn connection_timeout_ms(mut self, connection_timeout_ms: Option<u64>) -> Self {
        self.inner.connection_timeout_ms = connection_timeout_ms;
        self
    }

    #[must_use]
    pub fn socket_timeout_ms(mut self, socket_timeout_ms: Option<u64>) -> Self {
        self.inner.socket_timeout_ms = socket_timeout_ms;
        self
    }

    pub fn proxy_endpoint(mut self, proxy_endpoint: Option<&str>) -> Result<Self, HttpConfigErr> {
        self.inner.proxy_endpoint = proxy_endpoint.map(ProxyConfig::from_endpoint).transpose()?;
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> HttpClientConfigurator {
        HttpClientConfigurator { config: self.inner }
    }
}
