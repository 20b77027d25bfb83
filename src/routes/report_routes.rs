use axum::{Router, routing::get};
use crate::{AppState, controllers::daily_report_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/report/daily-reports", get(daily_report_controller::show_all))
        .route(
            "/report/daily-reports/:id",
            get(daily_report_controller::show)
                .put(daily_report_controller::update)
                .delete(daily_report_controller::destroy),
        )
        .route("/report/daily-reports/ticker/:ticker", get(daily_report_controller::show_by_ticker))
}
