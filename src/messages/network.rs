//! Network messages - communication between App and Network layers

use crate::models::{Comment, CommentDraft, Post, User};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the user list
    LoadUsers { id: u64 },
    /// Fetch the posts of a user
    LoadPosts { id: u64, user_id: u64 },
    /// Fetch the comments of a post
    LoadComments { id: u64, post_id: u64 },
    /// Create a comment on a post
    CreateComment {
        id: u64,
        post_id: u64,
        draft: CommentDraft,
    },
    /// Delete a comment
    DeleteComment {
        id: u64,
        post_id: u64,
        comment_id: u64,
    },
    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkCommand::LoadUsers { id }
            | NetworkCommand::LoadPosts { id, .. }
            | NetworkCommand::LoadComments { id, .. }
            | NetworkCommand::CreateComment { id, .. }
            | NetworkCommand::DeleteComment { id, .. } => Some(*id),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer.
///
/// Every command except `Shutdown` produces exactly one response. Failures
/// carry the rendered `NetworkError` for logging only.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Users {
        id: u64,
        result: Result<Vec<User>, String>,
    },
    Posts {
        id: u64,
        user_id: u64,
        result: Result<Vec<Post>, String>,
    },
    Comments {
        id: u64,
        post_id: u64,
        result: Result<Vec<Comment>, String>,
    },
    CommentCreated {
        id: u64,
        post_id: u64,
        result: Result<Comment, String>,
    },
    CommentDeleted {
        id: u64,
        post_id: u64,
        comment_id: u64,
        result: Result<(), String>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Users { id, .. }
            | NetworkResponse::Posts { id, .. }
            | NetworkResponse::Comments { id, .. }
            | NetworkResponse::CommentCreated { id, .. }
            | NetworkResponse::CommentDeleted { id, .. } => *id,
        }
    }
}
