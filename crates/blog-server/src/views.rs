//! HTML views, compiled from `templates/` by askama

use askama::Template;
use blog_types::Post;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub posts: &'a [Post],
}

#[derive(Template)]
#[template(path = "show_post.html")]
pub struct ShowPostPage<'a> {
    pub post: &'a Post,
}

#[derive(Template)]
#[template(path = "create_post.html")]
pub struct CreatePostPage;

#[derive(Template)]
#[template(path = "edit_post.html")]
pub struct EditPostPage<'a> {
    pub post: &'a Post,
}

/// Status page for 4xx/5xx responses
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub message: String,
}
