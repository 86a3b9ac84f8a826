pub mod http_client_builder;
pub mod providers;
pub mod proxy_config;
