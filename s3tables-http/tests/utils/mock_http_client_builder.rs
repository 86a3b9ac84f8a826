use s3tables_http::{HttpClientBuilder, ProxyConfig};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ConnectionTimeout(Duration),
    SocketTimeout(Duration),
    Proxy(ProxyConfig),
}

#[derive(Debug, Default, PartialEq)]
pub struct MockHttpClientBuilder {
    pub calls: Vec<RecordedCall>,
}

impl MockHttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&RecordedCall) -> bool,
    {
        self.calls.iter().filter(|c| predicate(*c)).count()
    }
}

impl HttpClientBuilder for MockHttpClientBuilder {
    fn connection_timeout(&mut self, timeout: Duration) {
        self.calls.push(RecordedCall::ConnectionTimeout(timeout));
    }

    fn socket_timeout(&mut self, timeout: Duration) {
        self.calls.push(RecordedCall::SocketTimeout(timeout));
    }

    fn proxy_configuration(&mut self, proxy: ProxyConfig) {
        self.calls.push(RecordedCall::Proxy(proxy));
    }
}
