use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::account::errors::AccountError;
use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AccountError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AccountError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "auth.invalid_credentials",
            ),
            AccountError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "account.not_found"),
            AccountError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SessionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
