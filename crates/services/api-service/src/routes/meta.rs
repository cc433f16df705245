use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

pub fn serve_meta() -> Router {
    Router::new().route("/ping", get(ping))
}

#[utoipa::path(get, tag = "Meta", path = "/ping", responses((status = 200, description = "Liveness check")))]
async fn ping() -> Json<Value> {
    Json(json!({ "ping": "pong" }))
}
