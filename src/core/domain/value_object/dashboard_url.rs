use crate::core::domain::{
    error::{DashboardResult, ValidationError},
    value_object::{base_value_object::ValueObject, server_id::ServerId},
};
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Represents the configuration for a dashboard base URL
///
/// Encapsulates the constraints for URL validation according to
/// RFC 3986 (URI Generic Syntax) and RFC 7230 (HTTP/1.1).
#[derive(Debug, Clone)]
pub struct DashboardUrlConfig {
    allowed_schemes: HashSet<String>,
    max_length: usize,
}

impl DashboardUrlConfig {
    fn validate_url(&self, url: &Url) -> Result<(), ValidationError> {
        if url.as_str().len() > self.max_length {
            return Err(ValidationError::Format(format!(
                "URL exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        if !self.allowed_schemes.contains(url.scheme()) {
            let mut schemes: Vec<&str> = self.allowed_schemes.iter().map(String::as_str).collect();
            schemes.sort_unstable();
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid scheme. Must be one of: {}",
                schemes.join(", ")
            )));
        }

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ValidationError::Field {
                field: "url".to_string(),
                message: "URL must include a host".to_string(),
            });
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ValidationError::ConstraintViolation(
                "Base URL cannot carry a query or fragment".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DashboardUrlConfig {
    fn default() -> Self {
        let mut schemes = HashSet::new();
        schemes.insert("https".to_string());
        schemes.insert("http".to_string());

        Self {
            allowed_schemes: schemes,
            max_length: 2083, // RFC 7230 standard
        }
    }
}

/// The validated root URL of the dashboard backend.
///
/// The backend may be mounted under a prefix (`http://host/panel/`); every
/// endpoint path is resolved below it. Path segments taken from server
/// identifiers are percent-encoded, so an id can never escape its segment.
///
/// # Examples
///
/// ```
/// use server_dashboard::{DashboardUrl, ServerId};
///
/// let base = DashboardUrl::parse("http://localhost:5000").unwrap();
/// let url = base.endpoint(&["servers"], Some(&ServerId::new_unchecked("a/b")));
/// assert_eq!(url.as_str(), "http://localhost:5000/servers/a%2Fb");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardUrl {
    value: Url,
}

impl DashboardUrl {
    /// Parses and validates a base URL.
    pub fn parse(input: &str) -> DashboardResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Field {
                field: "url".to_string(),
                message: "URL cannot be empty".to_string(),
            }
            .into());
        }
        let url = Url::parse(trimmed)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        <Self as ValueObject>::new(url)
    }

    /// Builds the URL of an endpoint: the fixed `segments` followed by the
    /// optional server identifier, each as its own encoded path segment.
    pub fn endpoint(&self, segments: &[&str], id: Option<&ServerId>) -> Url {
        let mut url = self.value.clone();
        // validated URLs always have a host, so they can be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
            if let Some(id) = id {
                path.push(id.as_str());
            }
        }
        url
    }
}

impl ValueObject for DashboardUrl {
    type Value = Url;
    type ValidationConfig = DashboardUrlConfig;

    fn value(&self) -> &Self::Value {
        &self.value
    }

    fn validation_config() -> Self::ValidationConfig {
        DashboardUrlConfig::default()
    }

    fn validate(
        value: &Self::Value,
        config: &Self::ValidationConfig,
    ) -> Result<(), ValidationError> {
        config.validate_url(value)
    }

    fn create(value: Self::Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for DashboardUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value.as_str())
    }
}
