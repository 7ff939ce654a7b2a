//! Shared harness: a real server on an ephemeral port over a temp database.

use blog_server::storage::Database;
use blog_server::{router, AppState};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestServer {
    pub base: String,
    // Held so the database file outlives the test
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Bind to port 0 and return the actual address.
pub async fn start_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(&dir.path().join("blog.db"), 5).await.unwrap();
    db.init_schema().await.unwrap();

    let app = router(AppState::new(Arc::new(db)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{addr}"),
        _dir: dir,
    }
}
