#![allow(dead_code)]

pub mod helpers;
pub mod mock_http_client_builder;
pub mod mock_log_provider;
pub mod mock_sdk_client_builder;
