//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use bloggy_core::error::{PostError, SessionError};
use bloggy_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid password")]
    Unauthorized,

    #[error("Validation errors: {0:?}")]
    Validation(Vec<String>),

    #[error("Post store unavailable: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Unauthorized => ErrorResponse::wrong_password(),
            AppError::Validation(errors) => ErrorResponse::validation(errors),
            AppError::Upstream(detail) => {
                tracing::error!(detail = %detail, "Post store failure");
                ErrorResponse::bad_gateway()
            }
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(id) => AppError::NotFound(format!("Blog post {id} not found")),
            PostError::TransportFailure(msg) => AppError::Upstream(msg),
            PostError::Unknown(msg) => AppError::Internal(msg),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_post_errors_map_to_status() {
        let cases = [
            (PostError::NotFound(Uuid::new_v4()), StatusCode::NOT_FOUND),
            (
                PostError::TransportFailure("refused".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                PostError::Unknown("eof".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }
}
