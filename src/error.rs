use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum GymFlowError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidInput(&'static str),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl IntoResponse for GymFlowError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match &self {
            GymFlowError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            GymFlowError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            GymFlowError::JsonRejection(rej) => (rej.status(), rej.body_text()),
            GymFlowError::QueryRejection(rej) => (rej.status(), rej.body_text()),
            GymFlowError::DatabaseError(_)
            | GymFlowError::Json(_)
            | GymFlowError::Io(_)
            | GymFlowError::Config(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, Json(ApiErrorBody { detail })).into_response()
    }
}

/// Error body shared by every failing endpoint.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
