use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{models::CreateOrderRequest, render, services::order_service, AppState};

use super::{bad_body, parse_id};

// POST /user/createOrder
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(e) => return bad_body(e),
    };

    match order_service::create_order(&state, req).await {
        Ok(order_id) => render::success(
            StatusCode::CREATED,
            "Order created successfully.",
            json!({ "orderId": order_id }),
        ),
        Err(e) => e.into_response(),
    }
}

// PUT /user/cancelOrder/:orderId
pub async fn cancel_order(State(state): State<AppState>, Path(order_id): Path<String>) -> Response {
    let order_id = match parse_id(&order_id, "Order") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match order_service::cancel_order(&state, order_id).await {
        Ok(order) => render::success(
            StatusCode::OK,
            format!("Order with id {order_id} cancelled successfully."),
            order,
        ),
        Err(e) => e.into_response(),
    }
}

// GET /user/orders
pub async fn get_all_orders(State(state): State<AppState>) -> Response {
    match order_service::get_all_orders(&state).await {
        Ok(orders) => render::success(StatusCode::OK, "All orders retrieved successfully.", orders),
        Err(e) => e.into_response(),
    }
}

// GET /user/orders/:userId
pub async fn get_orders_by_user_id(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id = match parse_id(&user_id, "User") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match order_service::get_orders_by_user_id(&state, user_id).await {
        Ok(orders) => render::success(
            StatusCode::OK,
            format!("Orders for user with id {user_id} retrieved successfully."),
            orders,
        ),
        Err(e) => e.into_response(),
    }
}

// GET /user/orders-acc/:accountId
pub async fn get_orders_by_account_id(State(state): State<AppState>, Path(account_id): Path<String>) -> Response {
    let account_id = match parse_id(&account_id, "Account") {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match order_service::get_orders_by_account_id(&state, account_id).await {
        Ok(orders) => render::success(
            StatusCode::OK,
            format!("Orders for account with id {account_id} retrieved successfully."),
            orders,
        ),
        Err(e) => e.into_response(),
    }
}
