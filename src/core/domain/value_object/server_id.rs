use crate::core::domain::{
    error::ValidationError, value_object::base_value_object::ValueObject,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraints for a server identifier.
#[derive(Debug, Clone)]
pub struct ServerIdConfig {
    max_length: usize,
}

impl Default for ServerIdConfig {
    fn default() -> Self {
        Self { max_length: 256 }
    }
}

/// Validates a raw identifier against the given configuration.
pub(crate) fn validate_server_id(value: &str, config: &ServerIdConfig) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "server_id".to_string(),
            message: "Server ID cannot be empty".to_string(),
        });
    }
    if value.len() > config.max_length {
        return Err(ValidationError::Format(format!(
            "Server ID exceeds maximum length of {} characters",
            config.max_length
        )));
    }
    if value == "." || value == ".." {
        return Err(ValidationError::ConstraintViolation(
            "Server ID cannot be a relative path segment".to_string(),
        ));
    }
    if value.chars().any(char::is_control) {
        return Err(ValidationError::Format(
            "Server ID cannot contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Opaque backend identifier of a server record.
///
/// The backend hands these out (a hex object id in practice) and the client
/// never interprets them; they are only echoed back in request paths, where
/// they are percent-encoded as a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId {
    value: String,
}

impl ServerId {
    /// Wraps an identifier without validation. Identifiers decoded from
    /// backend responses take this path.
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl ValueObject for ServerId {
    type Value = String;
    type ValidationConfig = ServerIdConfig;

    fn value(&self) -> &Self::Value {
        &self.value
    }

    fn validation_config() -> Self::ValidationConfig {
        ServerIdConfig::default()
    }

    fn validate(
        value: &Self::Value,
        config: &Self::ValidationConfig,
    ) -> Result<(), ValidationError> {
        validate_server_id(value, config)
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
