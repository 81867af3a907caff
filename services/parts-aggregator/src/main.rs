//! Breadboard Parts Aggregator Service
//!
//! Aggregates part-catalog data from the Arrow and TTI supplier feeds into a
//! single normalized record per part number.

use anyhow::Result;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    serve, Router,
};
use breadboard_utils::{init_logging, AppConfig};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod arrow_normalizer;
mod handlers;
mod lead_time;
mod metrics;
mod middleware;
mod routes;
mod service;
mod supplier_client;
mod tti_normalizer;

use handlers::{health_check, metrics_handler};
use metrics::Metrics;
use middleware::request_id_middleware;
use service::{PartsService, SupplierEndpoints};
use supplier_client::SupplierClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Breadboard Parts Aggregator");

    let metrics = Metrics::new()?;
    let client = SupplierClient::new(&config.suppliers)?;
    let service = PartsService::new(
        client,
        SupplierEndpoints::from(&config.suppliers),
        metrics.clone(),
    );
    info!(
        arrow_url = %config.suppliers.arrow_url,
        tti_url = %config.suppliers.tti_url,
        "Supplier feeds configured"
    );

    let app = create_app(AppState { service, metrics }, &config)?;

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Parts Aggregator listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = HeaderValue::from_str(&config.server.cors_origin)?;

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .nest("/v1", routes::create_api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_methods([Method::GET])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        .with_state(state);

    Ok(app)
}

#[derive(Clone)]
pub struct AppState {
    pub service: PartsService,
    pub metrics: Metrics,
}
