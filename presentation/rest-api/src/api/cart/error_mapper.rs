use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{IntoErrorResponse, MessageEnvelope};
use crate::api::security::TokenError;

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> Json<MessageEnvelope> {
        if let CartError::Repository(source) = &self {
            tracing::error!("cart service failed: {source}");
        }
        MessageEnvelope::failure(self.to_string())
    }
}

impl IntoErrorResponse for TokenError {
    fn into_error_response(self) -> Json<MessageEnvelope> {
        MessageEnvelope::failure(self.to_string())
    }
}
