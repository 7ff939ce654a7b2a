//! HTTP handlers

pub mod api;
pub mod health;
pub mod pages;

pub use health::health;

use crate::error::AppError;

/// Parse the `{id}` path segment. A segment that is not an integer names no
/// post, so it is reported as not found rather than as a bad request.
pub(crate) fn parse_post_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::NotFound)
}
