//! Error types for the storage layer and the two HTTP façades

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use blog_types::{MessageResponse, ValidationError};
use thiserror::Error;

use crate::views::ErrorPage;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures reported by a [`PostStore`](crate::storage::PostStore)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Post not found: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Persistence(#[from] sqlx::Error),
}

/// Request-level failure shared by the JSON and HTML façades
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Post not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Persistence(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Persistence(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound | AppError::Validation(_) | AppError::BadRequest(_) => {
                tracing::debug!("Request rejected: {}", self)
            }
            AppError::Persistence(e) => tracing::warn!("Store write failed: {}", e),
            AppError::Render(e) => tracing::error!("Failed to render page: {}", e),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound,
            StoreError::Persistence(e) => AppError::Persistence(e.to_string()),
        }
    }
}

/// [`AppError`] rendered as a JSON `{message}` body
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.log();
        let body = Json(MessageResponse::new(self.0.to_string()));
        (self.0.status(), body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError(e.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError(e.into())
    }
}

/// [`AppError`] rendered as an HTML error page
#[derive(Debug)]
pub struct PageError(pub AppError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log();
        let status = self.0.status();
        let message = match &self.0 {
            // Template internals stay in the log
            AppError::Render(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        let page = ErrorPage {
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, page.message).into_response()
            }
        }
    }
}

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl From<StoreError> for PageError {
    fn from(e: StoreError) -> Self {
        PageError(e.into())
    }
}

impl From<ValidationError> for PageError {
    fn from(e: ValidationError) -> Self {
        PageError(e.into())
    }
}

impl From<askama::Error> for PageError {
    fn from(e: askama::Error) -> Self {
        PageError(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation(ValidationError::MissingField("title")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Persistence("disk full".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            AppError::from(StoreError::NotFound(3)),
            AppError::NotFound
        ));

        let err = AppError::from(StoreError::Persistence(sqlx::Error::RowNotFound));
        match err {
            AppError::Persistence(text) => assert!(!text.is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound.to_string(), "Post not found");
    }
}
