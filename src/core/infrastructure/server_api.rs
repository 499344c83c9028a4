//! The backend operations the dashboard depends on.

use crate::core::{
    domain::{
        error::DashboardResult,
        model::{
            history::HistorySeries,
            insight::{FailurePrediction, MaintenanceSchedule},
            server::{NewServer, Server, ServerUpdate},
        },
        value_object::ServerId,
    },
    infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;

const SERVERS: &str = "servers";
const PREDICT_FAILURE: &str = "predict_server_failure";
const MAINTENANCE_SCHEDULE: &str = "generate_maintenance_schedule";
const SERVER_HISTORY: &str = "server_history";

/// Remote server-record API.
///
/// The controller only talks to the backend through this trait, so flows
/// can be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// `GET /servers`
    async fn list_servers(&self) -> DashboardResult<Vec<Server>>;

    /// `GET /servers/{id}`
    async fn server(&self, id: &ServerId) -> DashboardResult<Server>;

    /// `POST /servers`
    async fn create_server(&self, server: &NewServer) -> DashboardResult<()>;

    /// `PUT /servers/{id}`
    async fn update_server(&self, id: &ServerId, update: &ServerUpdate) -> DashboardResult<()>;

    /// `DELETE /servers/{id}`
    async fn delete_server(&self, id: &ServerId) -> DashboardResult<()>;

    /// `GET /predict_server_failure/{id}`
    async fn predict_failure(&self, id: &ServerId) -> DashboardResult<FailurePrediction>;

    /// `GET /generate_maintenance_schedule/{id}`
    async fn maintenance_schedule(&self, id: &ServerId) -> DashboardResult<MaintenanceSchedule>;

    /// `GET /server_history/{id}`
    async fn server_history(&self, id: &ServerId) -> DashboardResult<HistorySeries>;
}

/// [`ServerApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpServerApi {
    client: ApiClient,
}

impl HttpServerApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServerApi for HttpServerApi {
    async fn list_servers(&self) -> DashboardResult<Vec<Server>> {
        self.client.get(&[SERVERS], None).await
    }

    async fn server(&self, id: &ServerId) -> DashboardResult<Server> {
        self.client.get(&[SERVERS], Some(id)).await
    }

    async fn create_server(&self, server: &NewServer) -> DashboardResult<()> {
        self.client.post(&[SERVERS], server).await
    }

    async fn update_server(&self, id: &ServerId, update: &ServerUpdate) -> DashboardResult<()> {
        self.client.put(&[SERVERS], id, update).await
    }

    async fn delete_server(&self, id: &ServerId) -> DashboardResult<()> {
        self.client.delete(&[SERVERS], id).await
    }

    async fn predict_failure(&self, id: &ServerId) -> DashboardResult<FailurePrediction> {
        self.client.get(&[PREDICT_FAILURE], Some(id)).await
    }

    async fn maintenance_schedule(&self, id: &ServerId) -> DashboardResult<MaintenanceSchedule> {
        self.client.get(&[MAINTENANCE_SCHEDULE], Some(id)).await
    }

    async fn server_history(&self, id: &ServerId) -> DashboardResult<HistorySeries> {
        self.client.get(&[SERVER_HISTORY], Some(id)).await
    }
}
