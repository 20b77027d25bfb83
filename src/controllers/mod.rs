use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{error::ServiceError, render};

pub mod home_controller;
pub mod user_controller;
pub mod order_controller;
pub mod account_controller;
pub mod market_shares_controller;
pub mod daily_report_controller;

/// Path ids arrive as strings; anything that is not an integer cannot name a row.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ServiceError::NotFound(format!("{what} with id {raw} not found.")))
}

pub(crate) fn bad_body(e: JsonRejection) -> Response {
    ServiceError::Validation(e.body_text()).into_response()
}

/// Update endpoints answer 422 for anything that is not an operational failure,
/// including an unknown id.
pub(crate) fn update_failure(e: ServiceError) -> Response {
    match e {
        ServiceError::Operational(_) => e.into_response(),
        other => render::error(StatusCode::UNPROCESSABLE_ENTITY, other.to_string()),
    }
}
