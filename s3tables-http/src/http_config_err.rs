use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::logging_utils::sanitize_credentials;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HttpConfigErr {
    /// A recognized property was present but its value could not be parsed.
    /// `value` is stored with any proxy credentials already masked.
    ConfigParseError {
        key: String,
        value: String,
        reason: String,
    },

    // reqwest refused the accumulated builder settings
    ClientBuildError(String),
}

impl HttpConfigErr {
    pub(crate) fn parse_error(key: &str, value: &str, reason: impl Into<String>) -> Self {
        HttpConfigErr::ConfigParseError {
            key: key.to_string(),
            value: sanitize_credentials(value),
            reason: reason.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HttpConfigErr::ConfigParseError { .. } => "ConfigParseError",
            HttpConfigErr::ClientBuildError(_) => "ClientBuildError",
        }
    }
}

impl Display for HttpConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpConfigErr::ConfigParseError { key, value, reason } => {
                write!(f, "Failed to parse property '{key}' (value: '{value}'): {reason}")
            }
            HttpConfigErr::ClientBuildError(msg) => {
                let msg = sanitize_credentials(msg);
                write!(f, "Failed to build HTTP client: {msg}")
            }
        }
    }
}

impl std::error::Error for HttpConfigErr {}
