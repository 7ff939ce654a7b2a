//! JSON API handlers (`/api/posts`)

use crate::error::{ApiError, AppError};
use crate::handlers::parse_post_id;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use blog_types::{
    CreatePostRequest, MessageResponse, Post, PostCreatedResponse, UpdatePostRequest,
};
use tracing::debug;

fn rejected(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.store.get_all().await?;
    debug!("Listing {} posts", posts.len());
    Ok(Json(posts))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_post_id(&id)?;
    let post = state.store.get_by_id(id).await?;
    Ok(Json(post))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostCreatedResponse>), ApiError> {
    let Json(req) = payload.map_err(rejected)?;
    let post = req.validate()?;

    let id = state.store.create(&post).await?;

    Ok((StatusCode::CREATED, Json(PostCreatedResponse::new(id))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_post_id(&id)?;
    state.store.get_by_id(id).await?;
    let Json(req) = payload.map_err(rejected)?;
    let changes = req.validate()?;

    state.store.update(id, &changes).await?;

    Ok(Json(MessageResponse::new("Post updated")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_post_id(&id)?;
    state.store.delete(id).await?;
    Ok(Json(MessageResponse::new("Post deleted")))
}
