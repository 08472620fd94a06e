use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pie::errors::PieError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PieError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PieError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "pie.not_found"),
            PieError::Repository(_) => (
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
