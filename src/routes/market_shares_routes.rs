use axum::{Router, routing::{delete, get, post, put}};
use crate::{AppState, controllers::market_shares_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/marketShares/create", post(market_shares_controller::create))
        .route("/marketShares/catalog", get(market_shares_controller::catalog))
        .route("/marketShares/get/:marketSharesId", get(market_shares_controller::show))
        .route("/marketShares/update/:marketSharesId", put(market_shares_controller::update))
        .route("/marketShares/delete/:marketSharesId", delete(market_shares_controller::destroy))
        .route("/marketShares/marketShares/:ticker", get(market_shares_controller::get_by_ticker))
}
