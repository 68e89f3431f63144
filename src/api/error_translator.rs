use poem::http::StatusCode;
use poem::{Error, IntoResponse, Response};
use poem_openapi::payload::Json;

use crate::types::dto::ErrorEnvelope;

/// Last stop for every error leaving the service
///
/// Responses that already carry a JSON error envelope (produced by the bike
/// endpoints) pass through untouched. Everything else is wrapped in an
/// envelope: the error's own status and message when it has one, otherwise
/// 500 with a generic message.
pub async fn translate_error(err: Error) -> Response {
    let status = err.status();
    let message = err.to_string();
    let response = err.into_response();

    if is_json(&response) {
        return response;
    }

    let envelope = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Unhandled error: {}", message);
        ErrorEnvelope::new(status, "Internal server error")
    } else {
        tracing::warn!("Request failed with {}: {}", status, message);
        ErrorEnvelope::new(status, message)
    };

    Json(envelope).with_status(status).into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .content_type()
        .is_some_and(|content_type| content_type.starts_with("application/json"))
}
