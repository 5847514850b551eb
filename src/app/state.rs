//! App state - pure data structure with no I/O logic

use crate::app::form::CommentForm;
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::models::{Comment, Post, User};

/// A comments fetch the state is waiting on.
///
/// A resync follows a failed delete: it replaces the list but leaves the
/// error message in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingLoad {
    pub id: u64,
    pub resync: bool,
}

/// Main application state - pure data, no I/O
#[derive(Debug)]
pub struct AppState {
    pub focus: Focus,

    // Users
    pub users: Vec<User>,
    pub users_loading: bool,
    pub users_error: Option<String>,
    pub selected_user: Option<User>,
    pub selector_open: bool,
    pub selector_highlight: usize,

    // Posts of the selected user
    pub posts: Vec<Post>,
    pub posts_loading: bool,
    pub posts_error: Option<String>,
    pub selected_post: Option<Post>,
    pub post_cursor: usize,

    // Comments of the selected post
    pub comments: Vec<Comment>,
    pub comments_loading: bool,
    pub comments_error: Option<String>,
    pub comment_cursor: usize,

    // Comment form, reset whenever the selected post changes
    pub show_form: bool,
    pub form: CommentForm,

    // Popups
    pub show_help: bool,

    // Request tagging: only the latest request per region is applied
    pub next_request_id: u64,
    pub pending_users: Option<u64>,
    pub pending_posts: Option<u64>,
    pub pending_comments: Option<PendingLoad>,
    pub pending_create: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            focus: Focus::Users,
            users: Vec::new(),
            users_loading: false,
            users_error: None,
            selected_user: None,
            selector_open: false,
            selector_highlight: 0,
            posts: Vec::new(),
            posts_loading: false,
            posts_error: None,
            selected_post: None,
            post_cursor: 0,
            comments: Vec::new(),
            comments_loading: false,
            comments_error: None,
            comment_cursor: 0,
            show_form: false,
            form: CommentForm::new(),
            show_help: false,
            next_request_id: 1,
            pending_users: None,
            pending_posts: None,
            pending_comments: None,
            pending_create: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn selected_post_id(&self) -> Option<u64> {
        self.selected_post.as_ref().map(|post| post.id)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            focus: self.focus,
            users: self.users.clone(),
            users_loading: self.users_loading,
            users_error: self.users_error.clone(),
            selected_user: self.selected_user.clone(),
            selector_open: self.selector_open,
            selector_highlight: self.selector_highlight,
            posts: self.posts.clone(),
            posts_loading: self.posts_loading,
            posts_error: self.posts_error.clone(),
            selected_post: self.selected_post.clone(),
            post_cursor: self.post_cursor,
            comments: self.comments.clone(),
            comments_loading: self.comments_loading,
            comments_error: self.comments_error.clone(),
            comment_cursor: self.comment_cursor,
            show_form: self.show_form,
            form: self.form.clone(),
            show_help: self.show_help,
        }
    }
}
