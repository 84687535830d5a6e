//! po-dashboard Service - Purchase Order Reporting

use std::sync::Arc;

use cuba_bootstrap::{Infrastructure, run_http};
use tracing::info;

use po_dashboard::api::{AppState, router};
use po_dashboard::application::ReportingHandler;
use po_dashboard::infrastructure::persistence::PostgresReportRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    run_http(&config_dir, |infra: Infrastructure| async move {
        info!("Initializing po-dashboard Service...");

        let repo = Arc::new(PostgresReportRepository::new(infra.postgres_pool()));
        let handler = ReportingHandler::new(repo);

        let mut state = AppState::new(handler, infra.health_checker())
            .with_recent_activity_default_limit(
                infra.config().reports.recent_activity_default_limit,
            );
        if let Some(metrics) = infra.metrics() {
            state = state.with_metrics(metrics.clone());
        }

        Ok(router(state))
    })
    .await
}
