//! Browser-facing HTML handlers

use crate::error::{AppError, PageError};
use crate::handlers::parse_post_id;
use crate::views::{CreatePostPage, EditPostPage, ErrorPage, IndexPage, ShowPostPage};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use blog_types::{CreatePostRequest, PostChanges};

type PageResult<T> = Result<T, PageError>;

fn rejected(rejection: FormRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let posts = state.store.get_all().await?;
    Ok(Html(IndexPage { posts: &posts }.render()?))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> PageResult<Html<String>> {
    let id = parse_post_id(&id)?;
    let post = state.store.get_by_id(id).await?;
    Ok(Html(ShowPostPage { post: &post }.render()?))
}

pub async fn create_form() -> PageResult<Html<String>> {
    Ok(Html(CreatePostPage.render()?))
}

pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<CreatePostRequest>, FormRejection>,
) -> PageResult<Redirect> {
    let Form(req) = form.map_err(rejected)?;
    let post = req.validate()?;

    state.store.create(&post).await?;

    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let id = parse_post_id(&id)?;
    let post = state.store.get_by_id(id).await?;
    Ok(Html(EditPostPage { post: &post }.render()?))
}

/// The edit form always submits every field, so the record is overwritten
/// in full.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<CreatePostRequest>, FormRejection>,
) -> PageResult<Redirect> {
    let id = parse_post_id(&id)?;
    state.store.get_by_id(id).await?;
    let Form(req) = form.map_err(rejected)?;
    let post = req.validate()?;

    state
        .store
        .update(id, &PostChanges::replace_all(post))
        .await?;

    Ok(Redirect::to(&format!("/post/{}", id)))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> PageResult<Redirect> {
    let id = parse_post_id(&id)?;
    state.store.delete(id).await?;
    Ok(Redirect::to("/"))
}

/// Fallback for unmatched routes
pub async fn not_found() -> PageResult<(StatusCode, Html<String>)> {
    let page = ErrorPage {
        status: StatusCode::NOT_FOUND.as_u16(),
        message: "Page not found".to_string(),
    };
    Ok((StatusCode::NOT_FOUND, Html(page.render()?)))
}
