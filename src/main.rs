// Main entry point - data load, layout construction, export, serve
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::binder::ReactiveBinder;
use crate::application::dataset_source::DatasetSource;
use crate::infrastructure::config::{RunMode, load_dashboard_config};
use crate::infrastructure::owid_source::OwidCsvSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, index, update_charts};
use crate::presentation::layout::{PageLayout, export_layout};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // One fetch at startup; a load failure is fatal and the process never
    // serves without data.
    let source = OwidCsvSource::new();
    let table = source.load().await?;

    // The layout tree is built once from the initial table, and the static
    // document is written before anything is served.
    let layout = PageLayout::from_table(&table);
    export_layout(&layout, Path::new(&config.export.path))?;

    if config.run_mode == RunMode::Export {
        return Ok(());
    }

    // Create application state
    let state = Arc::new(AppState {
        table,
        layout,
        binder: ReactiveBinder::standard(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/update", post(update_charts))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    println!("Starting covid-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
