use atelier_models::contact::ContactFields;
use serde::{Deserialize, Serialize};

/// Raw submission payload; field rules are applied by the shared validator
/// after deserialization so the first failing field produces the response
/// message, not a serde error.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ApiContactSubmission> for ContactFields {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
}
