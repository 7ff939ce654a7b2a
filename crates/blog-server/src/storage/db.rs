//! SQLite database layer (embedded, no external dependencies)

use crate::error::{StoreError, StoreResult};
use crate::storage::PostStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use blog_types::{NewPost, Post, PostChanges};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;

const CREATE_POSTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(100) NOT NULL,
        author VARCHAR(50) NOT NULL,
        content TEXT NOT NULL
    )
"#;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database file. The schema is not
    /// touched; call [`Database::init_schema`] before serving requests.
    pub async fn open(database_path: &Path, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path.display());

        let parent = database_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        tokio::fs::create_dir_all(parent).await.with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;

        let test_file = parent.join(".write_test");
        match tokio::fs::write(&test_file, b"test").await {
            Ok(_) => {
                let _ = tokio::fs::remove_file(&test_file).await;
                tracing::debug!("Database directory is writable");
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Database directory is not writable: {}: {}",
                    parent.display(),
                    e
                ));
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to SQLite database at: {}",
                    database_path.display()
                )
            })?;

        tracing::info!("SQLite connection established");

        Ok(Self { pool })
    }

    /// Create the `posts` table if it does not exist yet. Safe to call on an
    /// already initialized database.
    pub async fn init_schema(&self) -> Result<()> {
        let existing: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'posts'
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .context("Failed to inspect database schema")?;

        if existing.is_some() {
            tracing::info!("Schema already present");
            return Ok(());
        }

        sqlx::query(CREATE_POSTS_TABLE)
            .execute(&self.pool)
            .await
            .context("Failed to create posts table")?;

        tracing::info!("Created posts table");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PostStore for Database {
    async fn create(&self, post: &NewPost) -> StoreResult<i64> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO posts (title, author, content)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&post.title)
        .bind(&post.author)
        .bind(&post.content)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;

        tracing::info!("Created post {}: {}", id, post.title);
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Post> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            SELECT id, title, author, content FROM posts WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Post::from).ok_or(StoreError::NotFound(id))
    }

    async fn get_all(&self) -> StoreResult<Vec<Post>> {
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT id, title, author, content FROM posts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn update(&self, id: i64, changes: &PostChanges) -> StoreResult<Post> {
        if changes.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut tx = self.pool.begin().await?;

        // Write first so the transaction takes the write lock up front
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                title = COALESCE(?1, title),
                author = COALESCE(?2, author),
                content = COALESCE(?3, content)
            WHERE id = ?4
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.author)
        .bind(&changes.content)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        let row: PostRow = sqlx::query_as(
            r#"
            SELECT id, title, author, content FROM posts WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let post = Post::from(row);
        tracing::info!("Updated {}", post);
        Ok(post)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tx.commit().await?;

        tracing::info!("Deleted post {}", id);
        Ok(())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    author: String,
    content: String,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            title: r.title,
            author: r.author,
            content: r.content,
        }
    }
}
