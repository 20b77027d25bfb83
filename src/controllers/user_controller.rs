use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    models::UserInput,
    render,
    services::{account_service, user_service},
    AppState,
};

use super::{bad_body, parse_id, update_failure};

// POST /user/create
pub async fn create(State(state): State<AppState>, body: Result<Json<UserInput>, JsonRejection>) -> Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(e) => return bad_body(e),
    };

    match user_service::create_user(&state, &input).await {
        Ok((user, account_id)) => render::success(
            StatusCode::CREATED,
            "User and account created successfully.",
            json!({
                "id": user.id,
                "document": user.document,
                "first_name": user.first_name,
                "last_name": user.last_name,
                "accountId": account_id,
            }),
        ),
        Err(e) => e.into_response(),
    }
}

// POST /user/openAccount/:userId
pub async fn open_account(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match account_service::open_account(&state, user_id).await {
        Ok(account) => render::success(StatusCode::CREATED, "Account created successfully.", account),
        Err(e) => e.into_response(),
    }
}

// DELETE /user/deleteAccount/:accountId
pub async fn delete_account(State(state): State<AppState>, Path(account_id): Path<String>) -> Response {
    let account_id = match parse_id(&account_id, "Account") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match account_service::delete_account(&state, account_id).await {
        Ok(()) => render::success(StatusCode::OK, "Account deleted successfully.", json!([])),
        Err(e) => e.into_response(),
    }
}

// GET /user/accounts/:userId
pub async fn show_all_accounts(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match account_service::accounts_for_user(&state, user_id).await {
        Ok(accounts) => render::success(
            StatusCode::OK,
            format!("All accounts for user with id {user_id} retrieved successfully."),
            accounts,
        ),
        Err(e) => e.into_response(),
    }
}

// GET /user/get/:userId
pub async fn show(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match user_service::get_user(&state, user_id).await {
        Ok(user) => render::success(StatusCode::OK, "User found.", user),
        Err(e) => e.into_response(),
    }
}

// GET /user/get
pub async fn show_all(State(state): State<AppState>) -> Response {
    match user_service::list_users(&state).await {
        Ok(users) => render::success(StatusCode::OK, "All registered users", users),
        Err(e) => e.into_response(),
    }
}

// PUT /user/update/:userId
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<UserInput>, JsonRejection>,
) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return update_failure(e),
    };
    let Json(input) = match body {
        Ok(b) => b,
        Err(e) => return bad_body(e),
    };

    match user_service::update_user(&state, user_id, &input).await {
        Ok(user) => render::success(StatusCode::OK, "User updated successfully", user),
        Err(e) => update_failure(e),
    }
}

// DELETE /user/delete/:userId
pub async fn destroy(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match user_service::delete_user(&state, user_id).await {
        Ok(()) => render::success(StatusCode::OK, "Successfully deleted user", json!([])),
        Err(e) => e.into_response(),
    }
}
