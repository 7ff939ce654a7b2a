//! Post entity and its write models

use serde::{Deserialize, Serialize};

/// A persisted blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Post {}>", self.title)
    }
}

/// Validated input for a new post. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Changes that overwrite every mutable field
    pub fn replace_all(post: NewPost) -> Self {
        Self {
            title: Some(post.title),
            author: Some(post.author),
            content: Some(post.content),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }
}
