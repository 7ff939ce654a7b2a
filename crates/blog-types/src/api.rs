//! Request and response schemas for the HTTP layer

use crate::error::ValidationError;
use crate::post::{NewPost, PostChanges};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`, also the form body of `POST /create` and
/// `POST /edit/{id}`.
///
/// Every field is optional at the decoding stage so that a missing field is
/// reported as a [`ValidationError`] instead of a decoder rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, ValidationError> {
        Ok(NewPost {
            title: required_text("title", self.title)?,
            author: required_text("author", self.author)?,
            content: self.content.ok_or(ValidationError::MissingField("content"))?,
        })
    }
}

/// Body of `PUT /api/posts/{id}`. Omitted or `null` fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(self) -> Result<PostChanges, ValidationError> {
        Ok(PostChanges {
            title: self.title.map(|t| non_empty("title", t)).transpose()?,
            author: self.author.map(|a| non_empty("author", a)).transpose()?,
            content: self.content,
        })
    }
}

/// Generic `{message}` body used for confirmations and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful `POST /api/posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreatedResponse {
    pub message: String,
    pub id: i64,
}

impl PostCreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Post created".to_string(),
            id,
        }
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    non_empty(field, value)
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validates() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"T","author":"A","content":"C"}"#).unwrap();
        let post = req.validate().unwrap();
        assert_eq!(post.title, "T");
        assert_eq!(post.author, "A");
        assert_eq!(post.content, "C");
    }

    #[test]
    fn test_create_request_missing_author() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        assert_eq!(
            req.validate(),
            Err(ValidationError::MissingField("author"))
        );
    }

    #[test]
    fn test_create_request_blank_title() {
        let req = CreatePostRequest {
            title: Some("   ".to_string()),
            author: Some("A".to_string()),
            content: Some("C".to_string()),
        };
        assert_eq!(req.validate(), Err(ValidationError::EmptyField("title")));
    }

    #[test]
    fn test_create_request_allows_empty_content() {
        let req = CreatePostRequest {
            title: Some("T".to_string()),
            author: Some("A".to_string()),
            content: Some(String::new()),
        };
        assert_eq!(req.clone().validate().unwrap().content, "");

        let req = CreatePostRequest {
            content: None,
            ..req
        };
        assert_eq!(req.validate(), Err(ValidationError::MissingField("content")));
    }

    #[test]
    fn test_update_request_partial() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        let changes = req.validate().unwrap();
        assert_eq!(changes.title.as_deref(), Some("X"));
        assert!(changes.author.is_none());
        assert!(changes.content.is_none());
    }

    #[test]
    fn test_update_request_null_is_omitted() {
        let req: UpdatePostRequest =
            serde_json::from_str(r#"{"author":null,"content":"new"}"#).unwrap();
        let changes = req.validate().unwrap();
        assert!(changes.author.is_none());
        assert_eq!(changes.content.as_deref(), Some("new"));
    }

    #[test]
    fn test_update_request_rejects_empty_author() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"author":""}"#).unwrap();
        assert_eq!(req.validate(), Err(ValidationError::EmptyField("author")));
    }

    #[test]
    fn test_error_text() {
        assert_eq!(
            ValidationError::MissingField("author").to_string(),
            "Missing required field: author"
        );
    }
}
