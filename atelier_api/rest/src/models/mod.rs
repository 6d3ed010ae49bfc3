use serde::Serialize;

pub mod checkout;
pub mod contact;

/// Error envelope shared by all endpoints: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}
