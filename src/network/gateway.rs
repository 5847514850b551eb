//! API gateway port - the remote CRUD operations the app consumes

use async_trait::async_trait;

use crate::models::{Comment, CommentDraft, Post, User};
use crate::network::error::NetworkError;

/// Remote API for users, posts, and comments.
#[async_trait]
pub trait ApiGateway: Send + Sync + 'static {
    async fn list_users(&self) -> Result<Vec<User>, NetworkError>;

    async fn list_posts(&self, user_id: u64) -> Result<Vec<Post>, NetworkError>;

    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, NetworkError>;

    /// Create a comment on `post_id`. The returned comment carries the
    /// server-assigned id.
    async fn create_comment(
        &self,
        draft: &CommentDraft,
        post_id: u64,
    ) -> Result<Comment, NetworkError>;

    async fn delete_comment(&self, comment_id: u64) -> Result<(), NetworkError>;
}
