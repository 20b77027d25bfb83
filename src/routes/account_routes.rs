use axum::{Router, routing::{delete, get, post}};
use crate::{AppState, controllers::account_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/account/create/:userId", post(account_controller::create))
        .route("/account/get", get(account_controller::show_all))
        .route("/account/get/:accountId", get(account_controller::show))
        .route("/account/delete/:accountId", delete(account_controller::destroy))
}
