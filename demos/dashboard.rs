use server_dashboard::{DashboardClient, DashboardResult, Document, UserAction};
use std::env;

#[tokio::main]
async fn main() -> DashboardResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let url = env::var("DASHBOARD_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let client = DashboardClient::builder().base_url(url)?.build()?;
    let dashboard = client.dashboard(Document::standard());

    dashboard.load().await;

    let first = dashboard
        .page()
        .await
        .document
        .server_list()
        .and_then(|list| list.entries().first().cloned());

    if let Some(entry) = first {
        dashboard
            .dispatch(UserAction::PredictFailure(entry.id.clone()))
            .await;
        dashboard
            .dispatch(UserAction::GenerateMaintenance(entry.id.clone()))
            .await;
        dashboard
            .dispatch(UserAction::Visualize {
                id: entry.id.clone(),
                name: entry.name.clone(),
            })
            .await;
    }

    println!("{}", dashboard.render().await);
    if let Some(renderer) = dashboard.page().await.renderer.as_ref() {
        println!("{}", renderer.render_text(40));
    }

    Ok(())
}
