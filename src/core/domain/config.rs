//! Client configuration.

use crate::core::domain::{
    error::{DashboardResult, ValidationError},
    value_object::DashboardUrl,
};
use std::time::Duration;

/// Outgoing request rate limit.
///
/// When set, requests wait for capacity instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained requests per second.
    pub requests_per_second: u32,
    /// Requests allowed in a burst above the sustained rate.
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_second == 0 {
            return Err(ValidationError::Field {
                field: "requests_per_second".to_string(),
                message: "Rate must be at least one request per second".to_string(),
            });
        }
        if self.burst_size == 0 {
            return Err(ValidationError::Field {
                field: "burst_size".to_string(),
                message: "Burst size must be at least one".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for talking to the dashboard backend.
///
/// There is no retry policy and, unless `request_timeout` is set, no
/// timeout: a request runs until it succeeds or the transport fails.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub base_url: DashboardUrl,
    pub request_timeout: Option<Duration>,
    pub rate_limit: Option<RateLimitConfig>,
}

impl DashboardConfig {
    pub fn new(base_url: DashboardUrl) -> Self {
        Self {
            base_url,
            request_timeout: None,
            rate_limit: None,
        }
    }

    /// Checks the settings that types alone cannot guarantee.
    pub fn validate(&self) -> DashboardResult<()> {
        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.validate()?;
        }
        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ValidationError::Field {
                field: "request_timeout".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
