use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const AD_NOT_FOUND: &str = "ad not found";
pub const AD_ALREADY_EXISTS: &str = "ad already exists";
pub const INTERNAL_ERROR: &str = "internal server error";

/// Error returned by every handler, rendered as `{"error": <message>}`.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found() -> Self { Self::new(StatusCode::NOT_FOUND, AD_NOT_FOUND) }

    pub fn conflict() -> Self { Self::new(StatusCode::CONFLICT, AD_ALREADY_EXISTS) }

    pub fn bad_request(msg: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, msg) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::not_found(),
            ServiceError::Conflict(detail) => {
                warn!(%detail, "unique constraint violated");
                ApiError::conflict()
            }
            ServiceError::Validation(msg) => ApiError::bad_request(msg),
            ServiceError::Db(e) => {
                error!(error = %e, "database error");
                ApiError::internal()
            }
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ServiceError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Ids are digits only; anything else does not name an ad.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::not_found()
    }
}
