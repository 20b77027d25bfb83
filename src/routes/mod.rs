use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{controllers::home_controller, AppState};

pub mod home_routes;
pub mod user_routes;
pub mod account_routes;
pub mod market_shares_routes;
pub mod report_routes;

/// Primary API: users, accounts, market shares and orders.
pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = user_routes::add_routes(router);
    let router = account_routes::add_routes(router);
    let router = market_shares_routes::add_routes(router);

    finish(router, state)
}

/// Reporting API, served on its own port.
pub fn report_app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = report_routes::add_routes(router);

    finish(router, state)
}

fn finish(router: Router<AppState>, state: AppState) -> Router {
    router
        .fallback(home_controller::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
