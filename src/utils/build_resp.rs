use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::fmt::Display;
use tracing::error;

use crate::{
    constants::MSG_ERROR,
    routes::{ApiResponse, ErrorResponseBody},
};

/// Wraps `message` in the `{ message, status }` envelope.
pub fn build_resp<T: Serialize>(status: StatusCode, message: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            message,
            status: Some(status.as_u16()),
        }),
    )
}

/// Like [`build_resp`] but without the `status` field in the body.
pub fn build_msg_resp<T: Serialize>(message: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            message,
            status: None,
        }),
    )
}

/// Logs the cause and returns the generic error payload.
///
/// Clients tell failures apart by payload shape, so the HTTP status stays 200.
pub fn build_err_resp(
    context: &str,
    cause: impl Display,
) -> (StatusCode, Json<ErrorResponseBody>) {
    error!("{}: {}", context, cause);
    (
        StatusCode::OK,
        Json(ErrorResponseBody {
            message: String::from(MSG_ERROR),
        }),
    )
}
