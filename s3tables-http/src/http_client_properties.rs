use std::collections::HashMap;

/// Raw catalog properties handed to the HTTP client configuration.
pub type PropertyBag = HashMap<String, String>;

/// Connection timeout in milliseconds.
pub const CONNECTION_TIMEOUT_MS: &str = "connection-timeout-ms";

/// Socket (read) timeout in milliseconds.
pub const SOCKET_TIMEOUT_MS: &str = "socket-timeout-ms";

/// Proxy URI all requests are routed through, e.g. `http://proxy.example:8080`.
pub const PROXY_ENDPOINT: &str = "proxy-endpoint";

pub const RECOGNIZED_KEYS: [&str; 3] = [CONNECTION_TIMEOUT_MS, SOCKET_TIMEOUT_MS, PROXY_ENDPOINT];
