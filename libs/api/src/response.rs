use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use repository::RepositoryError;
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
                    .into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
                    .into_response()
            }
            ApiError::ServerError { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message, "details": details })),
            )
                .into_response(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ClientError(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::ClientError(rejection.body_text())
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    /// `message` names the failed operation in 500 responses.
    fn into_response(self, message: &str) -> ApiResponse<T>;

    /// Like `into_response`, but a missing entity is the client's fault
    /// (400) rather than a missing resource (404).
    fn into_client_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for repository::Response<T> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| match e {
            RepositoryError::Validation(_)
            | RepositoryError::Conflict(_)
            | RepositoryError::InvalidCredentials => {
                ApiError::ClientError(e.to_string())
            }
            RepositoryError::NotFound(_) => ApiError::NotFound(e.to_string()),
            RepositoryError::InSeaOrmDbErr { .. }
            | RepositoryError::PasswordHash(_) => {
                error!(task = message, error = %e);
                ApiError::ServerError {
                    message: message.to_string(),
                    details: e.to_string(),
                }
            }
        })
    }

    fn into_client_response(self, message: &str) -> ApiResponse<T> {
        self.into_response(message).map_err(|e| match e {
            ApiError::NotFound(message) => ApiError::ClientError(message),
            e => e,
        })
    }
}

#[derive(Serialize, ToSchema)]
pub struct MessageResp {
    pub message: String,
}

impl MessageResp {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreatedResp {
    pub message: String,
    pub id: i32,
}
