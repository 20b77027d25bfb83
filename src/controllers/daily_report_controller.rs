use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{models::NewDailyReport, render, services::daily_report_service, AppState};

use super::{bad_body, parse_id, update_failure};

// GET /report/daily-reports
pub async fn show_all(State(state): State<AppState>) -> Response {
    match daily_report_service::get_all_reports(&state).await {
        Ok(reports) => render::success(StatusCode::OK, "All daily reports retrieved successfully.", reports),
        Err(e) => e.into_response(),
    }
}

// GET /report/daily-reports/:id
pub async fn show(State(state): State<AppState>, Path(report_id): Path<String>) -> Response {
    let report_id = match parse_id(&report_id, "Daily report") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match daily_report_service::get_report_by_id(&state, report_id).await {
        Ok(report) => render::success(StatusCode::OK, "Daily report retrieved successfully.", report),
        Err(e) => e.into_response(),
    }
}

// GET /report/daily-reports/ticker/:ticker
pub async fn show_by_ticker(State(state): State<AppState>, Path(ticker): Path<String>) -> Response {
    match daily_report_service::get_reports_by_ticker(&state, &ticker).await {
        Ok(reports) => render::success(
            StatusCode::OK,
            format!("Daily reports for {ticker} retrieved successfully."),
            reports,
        ),
        Err(e) => e.into_response(),
    }
}

// PUT /report/daily-reports/:id
pub async fn update(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
    body: Result<Json<NewDailyReport>, JsonRejection>,
) -> Response {
    let report_id = match parse_id(&report_id, "Daily report") {
        Ok(id) => id,
        Err(e) => return update_failure(e),
    };
    let Json(report) = match body {
        Ok(b) => b,
        Err(e) => return bad_body(e),
    };

    match daily_report_service::update_report(&state, report_id, &report).await {
        Ok(updated) => render::success(StatusCode::OK, "Daily report updated successfully.", updated),
        Err(e) => update_failure(e),
    }
}

// DELETE /report/daily-reports/:id
pub async fn destroy(State(state): State<AppState>, Path(report_id): Path<String>) -> Response {
    let report_id = match parse_id(&report_id, "Daily report") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match daily_report_service::delete_report(&state, report_id).await {
        Ok(()) => render::success(StatusCode::OK, "Daily report deleted successfully.", json!([])),
        Err(e) => e.into_response(),
    }
}
