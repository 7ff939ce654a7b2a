//! Blog Server
//!
//! Serves a browser CRUD UI and a JSON CRUD API over the same SQLite-backed
//! post table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod storage;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use handlers::{api, pages};
use storage::PostStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

/// Build the full router: HTML pages at the root, JSON under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(pages::index))
        .route("/post/:id", get(pages::show))
        .route("/create", get(pages::create_form).post(pages::create))
        .route("/edit/:id", get(pages::edit_form).post(pages::edit))
        .route("/delete/:id", post(pages::delete))
        .nest("/api", api_routes())
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(api::list).post(api::create))
        .route(
            "/posts/:id",
            get(api::get).put(api::update).delete(api::delete),
        )
}
