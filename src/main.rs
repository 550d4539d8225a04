// Main entry point - Dependency injection and the apply loop
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_api::HttpDashboardApi;
use crate::presentation::console::run_apply_loop;
use crate::presentation::memory_document::{dashboard_layout, MemoryDocument};
use crate::presentation::tracing_renderers::{TracingChartRenderer, TracingMapRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    tracing::info!("Using statistics API at {}", config.api.base_url);

    // Adapters (infrastructure + presentation)
    let api = Arc::new(HttpDashboardApi::new(&config.api.base_url)?);
    let document = Arc::new(MemoryDocument::new(dashboard_layout()));
    let charts = Arc::new(TracingChartRenderer::default());
    let map = Arc::new(TracingMapRenderer);

    // Orchestrator (application layer)
    let service = Arc::new(DashboardService::new(
        api,
        document.clone(),
        charts,
        map,
        config,
    ));

    service.start().await;

    let stdin = BufReader::new(tokio::io::stdin());
    run_apply_loop(service, document, stdin).await
}
