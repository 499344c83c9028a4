//! The dashboard controller: one async flow per user action.
//!
//! A flow sends its request without holding the page lock and only takes
//! the lock to apply a successful response, so concurrent flows interleave
//! and whichever finishes last wins. On any failure the page is left as it
//! was before the flow started.

use crate::core::{
    domain::{
        error::DashboardResult,
        model::server::{MetricsInput, NewServer, ServerUpdate},
        value_object::ServerId,
    },
    infrastructure::server_api::ServerApi,
};
use crate::dashboard::{
    action::UserAction,
    chart::{ChartRenderer, ChartState},
    document::{Document, ids, missing},
    render::render_document,
    server_list::{ResultArea, ResultBlock},
};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything the controller paints: the document, the chart state and
/// the chart renderer once initialized.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub document: Document,
    pub chart: ChartState,
    pub renderer: Option<ChartRenderer>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            chart: ChartState::default(),
            renderer: None,
        }
    }
}

/// Drives the dashboard page against a [`ServerApi`].
pub struct DashboardController {
    api: Arc<dyn ServerApi>,
    page: RwLock<Page>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn ServerApi>, document: Document) -> Self {
        Self {
            api,
            page: RwLock::new(Page::new(document)),
        }
    }

    pub async fn page(&self) -> RwLockReadGuard<'_, Page> {
        self.page.read().await
    }

    /// Write access to the page, for input typed by the user.
    pub async fn page_mut(&self) -> RwLockWriteGuard<'_, Page> {
        self.page.write().await
    }

    /// Current page as HTML.
    pub async fn render(&self) -> String {
        render_document(&self.page.read().await.document)
    }

    /// Page-load sequence: set up the chart, then show the server list.
    pub async fn load(&self) {
        self.initialize_chart().await;
        self.dispatch(UserAction::Refresh).await;
    }

    /// Runs the flow for `action`. Failures are logged and the action is
    /// abandoned; nothing is reported back to the caller.
    pub async fn dispatch(&self, action: UserAction) {
        if let Err(e) = self.run(&action).await {
            tracing::error!(action = action.name(), error = %e, "dashboard action failed");
        }
    }

    /// Runs the flow for `action`, returning its outcome.
    pub async fn run(&self, action: &UserAction) -> DashboardResult<()> {
        match action {
            UserAction::Refresh => self.list_servers().await,
            UserAction::CreateServer => self.create_server().await,
            UserAction::DeleteServer(id) => self.delete_server(id).await,
            UserAction::OpenUpdateForm(id) => self.open_update_form(id).await,
            UserAction::SaveUpdate(id) => self.save_update(id).await,
            UserAction::PredictFailure(id) => self.predict_failure(id).await,
            UserAction::GenerateMaintenance(id) => self.generate_maintenance(id).await,
            UserAction::Visualize { id, name } => self.visualize(id, name).await,
        }
    }

    /// Binds a line-chart renderer to the chart state if the page has the
    /// chart canvas. A missing canvas is logged, never returned. Calling
    /// this again replaces the renderer.
    pub async fn initialize_chart(&self) {
        let mut guard = self.page.write().await;
        let page = &mut *guard;
        if !page.document.has_canvas() {
            tracing::error!(
                canvas = ids::METRICS_CHART,
                "chart canvas not found, chart not initialized"
            );
            return;
        }
        let mut renderer = ChartRenderer::new(page.chart.options().clone());
        renderer.paint(&page.chart);
        page.renderer = Some(renderer);
    }

    /// Fetches all servers and rebuilds the server list.
    pub async fn list_servers(&self) -> DashboardResult<()> {
        let servers = self.api.list_servers().await?;
        let mut page = self.page.write().await;
        let list = page.document.server_list_mut()?;
        tracing::debug!(count = servers.len(), "rendering server list");
        list.replace(servers);
        Ok(())
    }

    /// Submits the create form, clears it and refreshes the list.
    pub async fn create_server(&self) -> DashboardResult<()> {
        let [name, cpu, memory] = self.page.read().await.document.read_inputs(ids::CREATE_FORM)?;
        let server = NewServer::new(name, MetricsInput::parse(&cpu, &memory));

        self.api.create_server(&server).await?;
        tracing::info!(name = %server.name, "server created");

        {
            let mut page = self.page.write().await;
            for id in ids::CREATE_FORM {
                page.document.set_input(id, "")?;
            }
        }
        self.list_servers().await
    }

    /// Shows an edit form pre-filled from the entry, replacing whatever its
    /// result area held.
    pub async fn open_update_form(&self, id: &ServerId) -> DashboardResult<()> {
        let mut page = self.page.write().await;
        let entry = page
            .document
            .server_list_mut()?
            .entry_mut(id)
            .ok_or_else(|| missing(&format!("result-{}", id)))?;
        let form = entry.update_form();
        entry.result_area_mut().replace(ResultBlock::UpdateForm(form));
        Ok(())
    }

    /// Submits the entry's edit form and refreshes the list.
    pub async fn save_update(&self, id: &ServerId) -> DashboardResult<()> {
        let form = {
            let page = self.page.read().await;
            page.document
                .server_list()
                .and_then(|list| list.entry(id))
                .and_then(|entry| entry.result_area().update_form())
                .cloned()
                .ok_or_else(|| missing(&format!("update-name-{}", id)))?
        };
        let update = ServerUpdate {
            name: form.name,
            metrics: MetricsInput::parse(&form.cpu_usage, &form.memory_usage),
        };

        self.api.update_server(id, &update).await?;
        tracing::info!(server_id = %id, "server updated");
        self.list_servers().await
    }

    /// Deletes the server and refreshes the list.
    pub async fn delete_server(&self, id: &ServerId) -> DashboardResult<()> {
        self.api.delete_server(id).await?;
        tracing::info!(server_id = %id, "server deleted");
        self.list_servers().await
    }

    /// Replaces the entry's result area with the failure prediction.
    pub async fn predict_failure(&self, id: &ServerId) -> DashboardResult<()> {
        let prediction = self.api.predict_failure(id).await?;
        self.write_result(id, |area| {
            area.replace(ResultBlock::FailurePrediction(prediction.is_likely_to_fail))
        })
        .await;
        Ok(())
    }

    /// Appends the maintenance date to the entry's result area. Repeating
    /// the action repeats the line.
    pub async fn generate_maintenance(&self, id: &ServerId) -> DashboardResult<()> {
        let schedule = self.api.maintenance_schedule(id).await?;
        self.write_result(id, |area| {
            area.append(ResultBlock::MaintenanceDate(schedule.maintenance_date))
        })
        .await;
        Ok(())
    }

    /// Plots the server's CPU history and puts a heading with its name
    /// above the chart.
    pub async fn visualize(&self, id: &ServerId, name: &str) -> DashboardResult<()> {
        let history = self.api.server_history(id).await?;

        let mut guard = self.page.write().await;
        let page = &mut *guard;
        page.chart.replace_series(history);
        if let Some(renderer) = page.renderer.as_mut() {
            renderer.paint(&page.chart);
        }
        page.document
            .visualization_mut()?
            .replace_heading(format!("Historical CPU Usage for {}", name));
        Ok(())
    }

    /// Applies `f` to the entry's result area. An entry that is no longer
    /// listed (the list was redrawn meanwhile) is skipped.
    async fn write_result<F>(&self, id: &ServerId, f: F)
    where
        F: FnOnce(&mut ResultArea),
    {
        let mut page = self.page.write().await;
        match page
            .document
            .server_list_mut()
            .ok()
            .and_then(|list| list.entry_mut(id))
        {
            Some(entry) => f(entry.result_area_mut()),
            None => tracing::debug!(server_id = %id, "result area gone, result dropped"),
        }
    }
}
