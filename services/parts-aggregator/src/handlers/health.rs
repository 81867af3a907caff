use axum::{extract::State, response::Json};
use breadboard_utils::BreadboardResult;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "breadboard-parts-aggregator",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> BreadboardResult<String> {
    state.metrics.encode()
}
