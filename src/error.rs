use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::render;

/// Failure taxonomy of every service call. Messages are user facing.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Operational(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Operational(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Operational(format!("db error: {e}"))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Operational(msg) = &self {
            tracing::error!("{msg}");
        }
        render::error(self.status_code(), self.to_string())
    }
}

/// Maps constraint violations (duplicate ticker, row still referenced) to a validation
/// failure carrying `msg`; anything else stays operational.
pub fn constraint_or_operational(e: sqlx::Error, msg: impl Into<String>) -> ServiceError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
            return ServiceError::Validation(msg.into());
        }
    }
    ServiceError::from(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_http_status() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::Validation("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServiceError::Operational("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn sqlx_errors_are_operational() {
        let err: ServiceError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ServiceError::Operational(_)));
    }
}
