use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockly_core::DomainError;
use stockly_infra::StoreError;

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match &err {
        StoreError::NotFound { .. } => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "store unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", err.to_string())
        }
        StoreError::Constraint(_) => {
            json_error(StatusCode::CONFLICT, "constraint_violation", err.to_string())
        }
        StoreError::Decode(_) => {
            tracing::error!(error = %err, "stored record could not be decoded");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "decode_error", err.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
    }
}

/// Body extraction failures keep axum's status (415 without a JSON content
/// type, 400 for malformed JSON, 422 for a body of the wrong shape).
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
