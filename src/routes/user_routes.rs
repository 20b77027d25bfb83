use axum::{Router, routing::{delete, get, post, put}};
use crate::{AppState, controllers::{order_controller, user_controller}};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user/create", post(user_controller::create))
        .route("/user/openAccount/:userId", post(user_controller::open_account))
        .route("/user/get", get(user_controller::show_all))
        .route("/user/get/:userId", get(user_controller::show))
        .route("/user/accounts/:userId", get(user_controller::show_all_accounts))
        .route("/user/update/:userId", put(user_controller::update))
        .route("/user/delete/:userId", delete(user_controller::destroy))
        .route("/user/deleteAccount/:accountId", delete(user_controller::delete_account))
        // orders
        .route("/user/createOrder", post(order_controller::create_order))
        .route("/user/cancelOrder/:orderId", put(order_controller::cancel_order))
        .route("/user/orders", get(order_controller::get_all_orders))
        .route("/user/orders/", get(order_controller::get_all_orders))
        .route("/user/orders/:userId", get(order_controller::get_orders_by_user_id))
        .route("/user/orders-acc/:accountId", get(order_controller::get_orders_by_account_id))
}
