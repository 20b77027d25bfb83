use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{render, services::db_init, AppState};

pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn health_db(State(state): State<AppState>) -> Response {
    match db_init::ping(&state.db, &state.reports_db).await {
        Ok(()) => render::success(StatusCode::OK, "sqlite: ok", json!([])),
        Err(e) => render::error(StatusCode::INTERNAL_SERVER_ERROR, format!("sqlite error: {e}")),
    }
}

pub async fn not_found() -> Response {
    render::error(StatusCode::NOT_FOUND, "Not found")
}
