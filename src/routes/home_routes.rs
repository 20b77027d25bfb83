use axum::{Router, routing::get};
use crate::{AppState, controllers::home_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/ping", get(home_controller::ping))
        .route("/health/db", get(home_controller::health_db))
}
