//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use dealboard_domain::DealboardError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DealboardError);

impl From<InfraError> for DealboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DealboardError> for InfraError {
    fn from(value: DealboardError) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDealboardError {
    fn into_dealboard(self) -> DealboardError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DealboardError */
/* -------------------------------------------------------------------------- */

impl IntoDealboardError for HttpError {
    fn into_dealboard(self) -> DealboardError {
        if self.is_timeout() {
            return DealboardError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DealboardError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return DealboardError::Upstream(format!("undecodable response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => DealboardError::NotFound(message),
                400..=499 => DealboardError::Upstream(message),
                _ => DealboardError::Network(message),
            };
        }

        DealboardError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_dealboard())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → DealboardError */
/* -------------------------------------------------------------------------- */

impl IntoDealboardError for IoError {
    fn into_dealboard(self) -> DealboardError {
        match self.kind() {
            ErrorKind::NotFound => DealboardError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                DealboardError::Cache(format!("permission denied: {self}"))
            }
            _ => DealboardError::Cache(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        Self(value.into_dealboard())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → DealboardError */
/* -------------------------------------------------------------------------- */

impl IntoDealboardError for JsonError {
    fn into_dealboard(self) -> DealboardError {
        DealboardError::Serialization(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_dealboard())
    }
}

impl IntoDealboardError for TomlError {
    fn into_dealboard(self) -> DealboardError {
        DealboardError::Config(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_dealboard())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
