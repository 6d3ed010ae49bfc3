use std::sync::Arc;

use atelier_core_checkout_contracts::{CheckoutCreateSessionError, CheckoutService};
use atelier_models::checkout::CheckoutRequest;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use url::Url;

use super::{bad_request_body, collaborator_error, error};
use crate::models::checkout::{ApiCheckoutRequest, CheckoutSessionResponse};

pub fn router(service: Arc<impl CheckoutService>) -> Router<()> {
    Router::new()
        .route("/checkout", routing::post(create_session))
        .with_state(service)
}

async fn create_session(
    service: State<Arc<impl CheckoutService>>,
    headers: HeaderMap,
    payload: Result<Json<ApiCheckoutRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return bad_request_body();
    };

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Url>().ok());

    let request = CheckoutRequest {
        product_id: payload.product_id,
        origin,
    };

    match service.create_session(request).await {
        Ok(url) => Json(CheckoutSessionResponse { url }).into_response(),
        Err(err @ CheckoutCreateSessionError::MissingProductId) => {
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(CheckoutCreateSessionError::Other(err)) => collaborator_error(err),
    }
}
