//! Internal HTTP client that speaks JSON to the dashboard backend.

use crate::core::domain::{
    config::DashboardConfig,
    error::{DashboardError, DashboardResult, ValidationError},
    value_object::{DashboardUrl, ServerId},
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method, Response,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::num::NonZeroU32;
use std::sync::Arc;
use url::Url;

/// Error body the backend sends with 4xx responses.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: String,
}

/// Internal HTTP client used by the server API.
///
/// Every call is a single request: no retry, no authentication. Any
/// non-2xx status is a transport error; a body that does not decode into
/// the expected type is a decoding error. Responses whose content the
/// caller ignores are never decoded.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: DashboardUrl,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient` from validated configuration.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` for an unusable configuration and
    /// `DashboardError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    ValidationError::Format("requests_per_second must be non-zero".to_string())
                })?;
                let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| {
                    ValidationError::Format("burst_size must be non-zero".to_string())
                })?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            rate_limiter,
        })
    }

    /// Performs a GET request and decodes the JSON response.
    pub async fn get<T>(&self, segments: &[&str], id: Option<&ServerId>) -> DashboardResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.endpoint(segments, id);
        let response = self.execute_request(Method::GET, url, None::<&()>).await?;
        Self::decode(response).await
    }

    /// Performs a POST request with a JSON body, ignoring the response body.
    pub async fn post<B>(&self, segments: &[&str], body: &B) -> DashboardResult<()>
    where
        B: Serialize,
    {
        let url = self.base_url.endpoint(segments, None);
        self.execute_request(Method::POST, url, Some(body)).await?;
        Ok(())
    }

    /// Performs a PUT request with a JSON body, ignoring the response body.
    pub async fn put<B>(&self, segments: &[&str], id: &ServerId, body: &B) -> DashboardResult<()>
    where
        B: Serialize,
    {
        let url = self.base_url.endpoint(segments, Some(id));
        self.execute_request(Method::PUT, url, Some(body)).await?;
        Ok(())
    }

    /// Performs a DELETE request, ignoring the response body.
    pub async fn delete(&self, segments: &[&str], id: &ServerId) -> DashboardResult<()> {
        let url = self.base_url.endpoint(segments, Some(id));
        self.execute_request(Method::DELETE, url, None::<&()>)
            .await?;
        Ok(())
    }

    /// Sends one request and maps transport-level outcomes to errors.
    async fn execute_request<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> DashboardResult<Response>
    where
        B: Serialize,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        tracing::debug!(%method, %url, "dashboard request");

        let mut req_builder = self.http_client.request(method.clone(), url.clone());
        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| DashboardError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BackendErrorBody>(&error_text)
                .map(|b| b.error)
                .unwrap_or(error_text);
            return Err(DashboardError::Transport(format!(
                "{} {} returned {}: {}",
                method,
                url.path(),
                status,
                message
            )));
        }

        Ok(response)
    }

    async fn decode<T>(response: Response) -> DashboardResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DashboardError::Transport(format!("Failed to read response: {}", e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| DashboardError::Decode(format!("Failed to parse response: {}", e)))
    }
}
