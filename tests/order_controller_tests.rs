use std::time::Duration;

use axum::{
    http::{header, Request, StatusCode},
    routing::{get, post, put},
    Router,
};
use http_body_util::BodyExt;
use rustbroker::{
    config,
    controllers::order_controller,
    error::ServiceError,
    models::{MarketShareInput, OrderStatus, UserInput},
    routes,
    services::{daily_report_service, market_shares_service, order_service, user_service},
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_state() -> AppState {
    let mut settings = config::load();
    settings.database_url = "sqlite::memory:".to_string();
    settings.report_database_url = "sqlite::memory:".to_string();

    AppState::connect(settings).await.expect("in-memory sqlite")
}

async fn response_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers one user (with their first account) and lists PETR4. Returns (user id, account id).
async fn seed(state: &AppState) -> (i64, i64) {
    let (user, account_id) = user_service::create_user(
        state,
        &UserInput {
            document: "123.456.789-00".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        },
    )
    .await
    .unwrap();

    market_shares_service::create_market_share(
        state,
        &MarketShareInput {
            ticker: "PETR4".to_string(),
            name: "Petrobras".to_string(),
            current_value: 30.0,
        },
    )
    .await
    .unwrap();

    (user.id, account_id)
}

fn create_order_request(body: Value) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri("/user/createOrder")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

fn create_order_app(state: AppState) -> Router {
    Router::new()
        .route("/user/createOrder", post(order_controller::create_order))
        .with_state(state)
}

#[tokio::test]
async fn create_order_writes_pending_order_and_one_report() {
    let state = test_state().await;
    let (user_id, account_id) = seed(&state).await;
    let app = create_order_app(state.clone());

    let req = create_order_request(json!({
        "executorId": user_id,
        "ticker": "PETR4",
        "quantity": 10,
        "action": "buy",
        "value": 150.0,
        "accountId": account_id,
    }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = response_json(res).await;
    assert_eq!(body["status"], "success");
    let order_id = body["payload"]["orderId"].as_i64().unwrap();

    let orders = order_service::get_all_orders(&state).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_id);
    assert_eq!(orders[0].status, OrderStatus::Pending);
    assert_eq!(orders[0].executor_id, user_id);
    assert_eq!(orders[0].account_id, Some(account_id));
    assert_eq!(orders[0].created_at, orders[0].updated_at);

    let reports = daily_report_service::get_all_reports(&state).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].ticker, "PETR4");
    assert_eq!(reports[0].quantity, 10);
    assert_eq!(reports[0].liquidity, 1500.0);
    assert_eq!(reports[0].created_at, orders[0].created_at);
}

#[tokio::test]
async fn create_order_unknown_ticker_writes_nothing() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;
    let app = create_order_app(state.clone());

    let req = create_order_request(json!({
        "executorId": user_id,
        "ticker": "NOPE3",
        "quantity": 10,
        "action": "buy",
        "value": 150.0,
    }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_json(res).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("NOPE3"));

    assert!(order_service::get_all_orders(&state).await.unwrap().is_empty());
    assert!(daily_report_service::get_all_reports(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_order_unknown_executor_is_not_found_and_writes_nothing() {
    let state = test_state().await;
    seed(&state).await;
    let app = create_order_app(state.clone());

    let req = create_order_request(json!({
        "executorId": 9999,
        "ticker": "PETR4",
        "quantity": 10,
        "action": "sell",
        "value": 150.0,
    }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_json(res).await;
    assert!(body["message"].as_str().unwrap().contains("9999"));

    assert!(order_service::get_all_orders(&state).await.unwrap().is_empty());
    assert!(daily_report_service::get_all_reports(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_order_missing_fields_is_rejected() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;
    let app = create_order_app(state.clone());

    let req = create_order_request(json!({
        "executorId": user_id,
        "ticker": "PETR4",
    }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(res).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["payload"], json!([]));
    let msg = body["message"].as_str().unwrap();
    assert!(msg.contains("quantity"));
    assert!(msg.contains("action"));
    assert!(msg.contains("value"));

    assert!(daily_report_service::get_all_reports(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_order_accepts_zero_value() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;
    let app = create_order_app(state.clone());

    let req = create_order_request(json!({
        "executorId": user_id,
        "ticker": "PETR4",
        "quantity": 5,
        "action": "HOLD",
        "value": 0,
    }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let reports = daily_report_service::get_all_reports(&state).await.unwrap();
    assert_eq!(reports[0].liquidity, 0.0);
}

#[tokio::test]
async fn create_order_malformed_body_is_rejected() {
    let state = test_state().await;
    let app = create_order_app(state);

    let req = Request::builder()
        .method("POST")
        .uri("/user/createOrder")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response_json(res).await["status"], "error");
}

#[tokio::test]
async fn cancel_order_marks_cancelled_and_advances_updated_at() {
    let state = test_state().await;
    let (user_id, account_id) = seed(&state).await;
    let app = routes::app(state.clone());

    let res = app
        .clone()
        .oneshot(create_order_request(json!({
            "executorId": user_id,
            "ticker": "PETR4",
            "quantity": 10,
            "action": "buy",
            "value": 150.0,
            "accountId": account_id,
        })))
        .await
        .unwrap();
    let order_id = response_json(res).await["payload"]["orderId"].as_i64().unwrap();
    let before = order_service::get_order(&state, order_id).await.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    let req = Request::builder()
        .method("PUT")
        .uri(format!("/user/cancelOrder/{order_id}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_json(res).await;
    assert_eq!(body["payload"]["status"], "CANCELLED");

    let after = order_service::get_order(&state, order_id).await.unwrap();
    assert_eq!(after.status, OrderStatus::Cancelled);
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.created_at, before.created_at);

    // the list endpoint reflects it too
    let req = Request::builder()
        .uri(format!("/user/orders-acc/{account_id}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let body = response_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(body["payload"][0]["status"], "CANCELLED");

    // reports are never touched by the lifecycle
    assert_eq!(daily_report_service::get_all_reports(&state).await.unwrap().len(), 1);
}

#[tokio::test]
async fn cancel_unknown_order_is_not_found() {
    let state = test_state().await;
    let app = Router::new()
        .route("/user/cancelOrder/:orderId", put(order_controller::cancel_order))
        .with_state(state);

    let req = Request::builder()
        .method("PUT")
        .uri("/user/cancelOrder/4242")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancelling_twice_succeeds_and_keeps_cancelled() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;

    let order_id = order_service::create_order(
        &state,
        serde_json::from_value(json!({
            "executorId": user_id,
            "ticker": "PETR4",
            "quantity": 3,
            "action": "sell",
            "value": 90.0,
        }))
        .unwrap(),
    )
    .await
    .unwrap();

    let first = order_service::cancel_order(&state, order_id).await.unwrap();
    let second = order_service::cancel_order(&state, order_id).await.unwrap();

    assert_eq!(first.status, OrderStatus::Cancelled);
    assert_eq!(second.status, OrderStatus::Cancelled);
    assert_eq!(second.updated_at, first.updated_at);
}

#[tokio::test]
async fn completed_order_cannot_be_cancelled() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;

    let order_id = order_service::create_order(
        &state,
        serde_json::from_value(json!({
            "executorId": user_id,
            "ticker": "PETR4",
            "quantity": 1,
            "action": "buy",
            "value": 30.0,
        }))
        .unwrap(),
    )
    .await
    .unwrap();

    order_service::transition_order(&state, order_id, OrderStatus::Completed)
        .await
        .unwrap();

    let err = order_service::cancel_order(&state, order_id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let order = order_service::get_order(&state, order_id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
}

#[tokio::test]
async fn orders_for_unknown_user_or_account_are_empty_lists() {
    let state = test_state().await;
    let app = Router::new()
        .route("/user/orders/:userId", get(order_controller::get_orders_by_user_id))
        .route("/user/orders-acc/:accountId", get(order_controller::get_orders_by_account_id))
        .with_state(state);

    for uri in ["/user/orders/77", "/user/orders-acc/77"] {
        let req = Request::builder().uri(uri).body(axum::body::Body::empty()).unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = response_json(res).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["payload"], json!([]));
    }
}

#[tokio::test]
async fn orders_are_listed_by_executor() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;

    for value in [100.0, 150.0] {
        order_service::create_order(
            &state,
            serde_json::from_value(json!({
                "executorId": user_id,
                "ticker": "PETR4",
                "quantity": 10,
                "action": "buy",
                "value": value,
            }))
            .unwrap(),
        )
        .await
        .unwrap();
    }

    let app = routes::app(state);
    let req = Request::builder()
        .uri(format!("/user/orders/{user_id}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let body = response_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(body["payload"].as_array().unwrap().len(), 2);

    let req = Request::builder().uri("/user/orders/").body(axum::body::Body::empty()).unwrap();
    let body = response_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(body["payload"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn failed_order_write_discards_its_report() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;

    sqlx::query("DROP TABLE orders").execute(&state.db).await.unwrap();

    let err = order_service::create_order(
        &state,
        serde_json::from_value(json!({
            "executorId": user_id,
            "ticker": "PETR4",
            "quantity": 10,
            "action": "buy",
            "value": 150.0,
        }))
        .unwrap(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::Operational(_)));
    assert!(daily_report_service::get_all_reports(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_report_append_leaves_no_order() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;

    sqlx::query("DROP TABLE daily_reports").execute(&state.reports_db).await.unwrap();

    let err = order_service::create_order(
        &state,
        serde_json::from_value(json!({
            "executorId": user_id,
            "ticker": "PETR4",
            "quantity": 10,
            "action": "buy",
            "value": 150.0,
        }))
        .unwrap(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::Operational(_)));
    assert!(order_service::get_all_orders(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_order_with_unrepresentable_liquidity_is_rejected() {
    let state = test_state().await;
    let (user_id, _) = seed(&state).await;

    let res = create_order_app(state.clone())
        .oneshot(create_order_request(json!({
            "executorId": user_id,
            "ticker": "PETR4",
            "quantity": 1000,
            "action": "BUY",
            "value": 1e307,
        })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(order_service::get_all_orders(&state).await.unwrap().is_empty());
    assert!(daily_report_service::get_all_reports(&state).await.unwrap().is_empty());
}
