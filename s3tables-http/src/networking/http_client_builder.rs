use std::time::Duration;

use super::proxy_config::ProxyConfig;

/// Setter surface of the HTTP client builder an SDK client is constructed with.
/// Every setter may be skipped, in which case the implementation keeps its own
/// default.
pub trait HttpClientBuilder {
    /// Max time to establish a connection.
    fn connection_timeout(&mut self, timeout: Duration);

    /// Max time to wait for data on an established connection.
    fn socket_timeout(&mut self, timeout: Duration);

    fn proxy_configuration(&mut self, proxy: ProxyConfig);
}
