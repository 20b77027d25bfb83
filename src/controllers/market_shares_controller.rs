use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::{models::MarketShareInput, render, services::market_shares_service, AppState};

use super::{bad_body, parse_id, update_failure};

// POST /marketShares/create
pub async fn create(State(state): State<AppState>, body: Result<Json<MarketShareInput>, JsonRejection>) -> Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(e) => return bad_body(e),
    };

    match market_shares_service::create_market_share(&state, &input).await {
        Ok(share) => render::success(StatusCode::CREATED, "Market share created successfully.", share),
        Err(e) => e.into_response(),
    }
}

// GET /marketShares/catalog
pub async fn catalog(State(state): State<AppState>) -> Response {
    match market_shares_service::catalog(&state).await {
        Ok(entries) => render::success(StatusCode::OK, "All market shares retrieved successfully.", entries),
        Err(e) => e.into_response(),
    }
}

// GET /marketShares/get/:marketSharesId
pub async fn show(State(state): State<AppState>, Path(share_id): Path<String>) -> Response {
    let share_id = match parse_id(&share_id, "Market share") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match market_shares_service::get_market_share(&state, share_id).await {
        Ok(share) => render::success(StatusCode::OK, "Market share retrieved successfully.", share),
        Err(e) => e.into_response(),
    }
}

// PUT /marketShares/update/:marketSharesId
pub async fn update(
    State(state): State<AppState>,
    Path(share_id): Path<String>,
    body: Result<Json<MarketShareInput>, JsonRejection>,
) -> Response {
    let share_id = match parse_id(&share_id, "Market share") {
        Ok(id) => id,
        Err(e) => return update_failure(e),
    };
    let Json(input) = match body {
        Ok(b) => b,
        Err(e) => return bad_body(e),
    };

    match market_shares_service::update_market_share(&state, share_id, &input).await {
        Ok(share) => render::success(StatusCode::OK, "Market share updated successfully.", share),
        Err(e) => update_failure(e),
    }
}

// DELETE /marketShares/delete/:marketSharesId
pub async fn destroy(State(state): State<AppState>, Path(share_id): Path<String>) -> Response {
    let share_id = match parse_id(&share_id, "Market share") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match market_shares_service::delete_market_share(&state, share_id).await {
        Ok(()) => render::success(StatusCode::OK, "Market share deleted successfully.", json!([])),
        Err(e) => e.into_response(),
    }
}

// GET /marketShares/marketShares/:ticker
pub async fn get_by_ticker(State(state): State<AppState>, Path(ticker): Path<String>) -> Response {
    match market_shares_service::get_market_shares_by_ticker(&state, &ticker).await {
        Ok(Some(share)) => render::success(StatusCode::OK, "Market share found.", share),
        Ok(None) => render::error_with_payload(
            StatusCode::NOT_FOUND,
            format!("Market share with ticker {ticker} not found."),
            Value::Null,
        ),
        Err(e) => e.into_response(),
    }
}
