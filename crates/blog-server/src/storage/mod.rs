//! Storage layer
//!
//! A single `posts` table in an embedded SQLite database, reached through the
//! [`PostStore`] trait so the HTTP layer never depends on the engine.

pub mod db;

pub use db::Database;

use crate::error::StoreResult;
use async_trait::async_trait;
use blog_types::{NewPost, Post, PostChanges};

/// Post store. Every write runs in its own transaction and is rolled back on
/// failure.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post and return its assigned id
    async fn create(&self, post: &NewPost) -> StoreResult<i64>;
    async fn get_by_id(&self, id: i64) -> StoreResult<Post>;
    /// All posts, ascending by id
    async fn get_all(&self) -> StoreResult<Vec<Post>>;
    /// Apply `changes` and return the post as stored afterwards
    async fn update(&self, id: i64, changes: &PostChanges) -> StoreResult<Post>;
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
