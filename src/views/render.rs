//! JSON envelope shared by every endpoint:
//! `{ "status": "success" | "error", "message": ..., "payload": ... }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub payload: T,
}

pub fn success<T: Serialize>(code: StatusCode, message: impl Into<String>, payload: T) -> Response {
    let body = Envelope {
        status: "success",
        message: message.into(),
        payload,
    };
    (code, Json(body)).into_response()
}

pub fn error(code: StatusCode, message: impl Into<String>) -> Response {
    error_with_payload(code, message, Value::Array(vec![]))
}

pub fn error_with_payload(code: StatusCode, message: impl Into<String>, payload: Value) -> Response {
    let body = Envelope {
        status: "error",
        message: message.into(),
        payload,
    };
    (code, Json(body)).into_response()
}
