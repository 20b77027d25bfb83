use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{render, services::account_service, AppState};

use super::parse_id;

// POST /account/create/:userId
pub async fn create(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match account_service::open_account(&state, user_id).await {
        Ok(account) => render::success(StatusCode::CREATED, "Account created successfully.", account),
        Err(e) => e.into_response(),
    }
}

// GET /account/get
pub async fn show_all(State(state): State<AppState>) -> Response {
    match account_service::list_accounts(&state).await {
        Ok(accounts) => render::success(StatusCode::OK, "All accounts retrieved successfully.", accounts),
        Err(e) => e.into_response(),
    }
}

// GET /account/get/:accountId
pub async fn show(State(state): State<AppState>, Path(account_id): Path<String>) -> Response {
    let account_id = match parse_id(&account_id, "Account") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match account_service::get_account(&state, account_id).await {
        Ok(account) => render::success(StatusCode::OK, "Account retrieved successfully.", account),
        Err(e) => e.into_response(),
    }
}

// DELETE /account/delete/:accountId
pub async fn destroy(State(state): State<AppState>, Path(account_id): Path<String>) -> Response {
    let account_id = match parse_id(&account_id, "Account") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match account_service::delete_account(&state, account_id).await {
        Ok(()) => render::success(StatusCode::OK, "Account deleted successfully.", json!([])),
        Err(e) => e.into_response(),
    }
}
