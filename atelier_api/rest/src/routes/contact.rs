use std::sync::Arc;

use atelier_core_contact_contracts::{ContactSendMessageError, ContactService};
use atelier_models::contact::ContactFields;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};

use super::{bad_request_body, collaborator_error, error};
use crate::models::contact::{ApiContactSubmission, SendMessageResponse};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    // a malformed body is a generic error, never a field error
    let Ok(Json(payload)) = payload else {
        return bad_request_body();
    };

    let submission = match ContactFields::from(payload).validate() {
        Ok(submission) => submission,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.to_string()),
    };

    match service.send_message(submission).await {
        Ok(()) => Json(SendMessageResponse { success: true }).into_response(),
        Err(err @ (ContactSendMessageError::Configuration | ContactSendMessageError::Send)) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(ContactSendMessageError::Other(err)) => collaborator_error(err),
    }
}
