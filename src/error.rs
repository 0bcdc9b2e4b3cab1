//! Error taxonomy shared by the service and HTTP layers.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::mongodb::MongoDaoError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed while executing an operation.
    #[error("storage unavailable")]
    Unavailable(#[from] MongoDaoError),
    /// Application is running in degraded mode without storage.
    #[error("storage unavailable (degraded mode)")]
    Degraded,
    /// Requested document was not found. The message is surfaced verbatim.
    #[error("{0}")]
    NotFound(String),
    /// Identifier could not be parsed into an ObjectId.
    #[error("malformed identifier `{0}`")]
    InvalidIdentifier(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found. Rendered without a prefix so the body
    /// carries the resource message as-is ("Sprite not found").
    #[error("{0}")]
    NotFound(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Degraded => AppError::ServiceUnavailable("degraded mode".into()),
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::InvalidIdentifier(raw) => {
                AppError::BadRequest(format!("malformed identifier `{raw}`"))
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Sprite not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("malformed identifier `zzz`".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn degraded_service_maps_to_503() {
        let app: AppError = ServiceError::Degraded.into();
        let response = app.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn not_found_message_is_carried_verbatim() {
        let app: AppError = ServiceError::NotFound("Audio file not found".into()).into();
        assert_eq!(app.to_string(), "Audio file not found");
    }

    #[test]
    fn invalid_identifier_becomes_bad_request() {
        let app: AppError = ServiceError::InvalidIdentifier("not-hex".into()).into();
        assert!(matches!(app, AppError::BadRequest(_)));
        assert!(app.to_string().contains("not-hex"));
    }
}
