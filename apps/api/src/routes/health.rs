use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness only; does not touch the database or the bucket.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}
