use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod checkout;
pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// A collaborator call failed; surface its message. Only used on paths
/// where the message cannot contain secret material.
pub fn collaborator_error(err: anyhow::Error) -> Response {
    tracing::error!("collaborator request failed: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub fn bad_request_body() -> Response {
    error(StatusCode::BAD_REQUEST, "Invalid request body")
}

fn error(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            error: message.into(),
        }),
    )
        .into_response()
}
