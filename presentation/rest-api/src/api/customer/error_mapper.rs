use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::dashboard::errors::DashboardError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DashboardError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            DashboardError::Repository(_) => (
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
