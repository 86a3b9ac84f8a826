pub use http_client_configurator::{
    HttpClientConfigurator, HttpClientConfiguratorBuilder, ParsedHttpConfig,
};
pub use http_client_properties::PropertyBag;
pub use http_config_err::HttpConfigErr;
pub use networking::http_client_builder::HttpClientBuilder;
pub use networking::proxy_config::ProxyConfig;
#[cfg(feature = "reqwest")]
pub use networking::providers::reqwest_builder::ReqwestHttpClientBuilder;
pub use sdk_client_builder::SdkClientBuilder;

pub mod http_client_configurator;
pub mod http_client_properties;
pub mod logging_utils;
pub mod networking;
pub mod output_logger;
pub mod property_util;
pub mod sdk_client_builder;

mod http_config_err;
mod macros;
