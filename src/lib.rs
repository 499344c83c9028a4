mod core;
mod dashboard;

#[cfg(test)]
mod tests;

pub use crate::core::domain::{
    config::{DashboardConfig, RateLimitConfig},
    error::{DashboardError, DashboardResult, ValidationError},
    model::{
        history::HistorySeries,
        insight::{FailurePrediction, MaintenanceSchedule},
        server::{Metrics, MetricsInput, NewServer, Server, ServerUpdate, parse_int},
    },
    value_object::{DashboardUrl, ServerId, ValueObject},
};
pub use crate::core::infrastructure::{
    api_client::ApiClient,
    server_api::{HttpServerApi, ServerApi},
};
pub use crate::dashboard::{
    action::{Button, UserAction},
    chart::{Axis, ChartFrame, ChartKind, ChartOptions, ChartRenderer, ChartState, Dataset},
    controller::{DashboardController, Page},
    document::{Document, SectionNode, VisualizationSection, ids},
    render::{render_document, render_entry},
    server_list::{ResultArea, ResultBlock, ServerEntry, ServerList, UpdateForm},
};

use std::sync::Arc;
use std::time::Duration;

/// A client for the server-monitoring dashboard backend.
///
/// It owns the HTTP side and hands out [`DashboardController`]s that drive a
/// page against it:
/// - server listing, creation, update and deletion
/// - failure prediction and maintenance scheduling
/// - CPU history for the chart
///
/// # Examples
///
/// ```no_run
/// use server_dashboard::{DashboardClient, DashboardResult, Document, UserAction};
///
/// #[tokio::main]
/// async fn main() -> DashboardResult<()> {
///     let client = DashboardClient::builder()
///         .base_url("http://localhost:5000")?
///         .build()?;
///
///     let dashboard = client.dashboard(Document::standard());
///     dashboard.load().await;
///     dashboard.dispatch(UserAction::Refresh).await;
///     println!("{}", dashboard.render().await);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardClient {
    api: Arc<HttpServerApi>,
}

/// Builder for DashboardClient configuration
#[derive(Debug, Default)]
pub struct DashboardClientBuilder {
    base_url: Option<DashboardUrl>,
    request_timeout: Option<Duration>,
    rate_limit: Option<RateLimitConfig>,
}

impl DashboardClientBuilder {
    /// Sets the backend root URL. Fails if it is not a valid http(s) URL.
    pub fn base_url(mut self, url: impl AsRef<str>) -> DashboardResult<Self> {
        self.base_url = Some(DashboardUrl::parse(url.as_ref())?);
        Ok(self)
    }

    /// Gives up on requests that take longer than `timeout`. Off by default.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Throttles outgoing requests. Off by default.
    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    pub fn build(self) -> DashboardResult<DashboardClient> {
        let base_url = self.base_url.ok_or_else(|| ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL is required".to_string(),
        })?;
        let config = DashboardConfig {
            base_url,
            request_timeout: self.request_timeout,
            rate_limit: self.rate_limit,
        };
        DashboardClient::with_config(config)
    }
}

impl DashboardClient {
    /// Creates a new builder for DashboardClient configuration
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    pub fn with_config(config: DashboardConfig) -> DashboardResult<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self {
            api: Arc::new(HttpServerApi::new(client)),
        })
    }

    /// Direct access to the backend operations.
    pub fn api(&self) -> &HttpServerApi {
        &self.api
    }

    /// A controller for `document`, sharing this client's connection pool.
    pub fn dashboard(&self, document: Document) -> DashboardController {
        DashboardController::new(self.api.clone(), document)
    }
}
