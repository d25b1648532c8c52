use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            RosterError::InvalidBody(rejection) => {
                let body = ApiErrorBody {
                    code: "INVALID_BODY".to_string(),
                    message: rejection.body_text(),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            RosterError::Database(e) => {
                error!(error = %e, "database operation failed");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
