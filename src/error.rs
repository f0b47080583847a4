use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with, mapped onto the HTTP surface in one
/// place so individual handlers only ever return `Result<_, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{} required", .0.join(" and "))]
    MissingFields(Vec<String>),

    #[error("start date must not be after end date")]
    InvalidRange,

    #[error("no file provided")]
    MissingFile,

    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("route not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields(_) | AppError::InvalidRange | AppError::MissingFile => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            AppError::Persistence(ref err) => {
                error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Failed to reach the database" })),
                )
                    .into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Route not found" })),
            )
                .into_response(),
            AppError::Internal(ref err) => {
                error!("unhandled error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
