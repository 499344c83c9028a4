mod history_tests;
mod insight_tests;
mod server_tests;

use crate::{ApiClient, DashboardConfig, DashboardUrl, HttpServerApi};
use wiremock::MockServer;

pub(super) fn create_test_api(mock_server: &MockServer) -> HttpServerApi {
    let config = DashboardConfig::new(DashboardUrl::parse(&mock_server.uri()).unwrap());
    HttpServerApi::new(ApiClient::new(&config).unwrap())
}
