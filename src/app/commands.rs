//! Command handlers - business logic for processing UI events and responses

use crate::app::form::CommentForm;
use crate::app::state::PendingLoad;
use crate::app::AppState;
use crate::constants::{
    COMMENTS_LOAD_ERROR, COMMENT_ADD_ERROR, COMMENT_DELETE_ERROR, POSTS_LOAD_ERROR,
    USERS_LOAD_ERROR,
};
use crate::messages::ui_events::{FormField, Focus};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Focus
    // ========================

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next(self.show_form);
        self.selector_open = false;
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev(self.show_form);
        self.selector_open = false;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Form && !self.show_form {
            return;
        }
        self.focus = focus;
    }

    // ========================
    // Data loading
    // ========================

    /// Startup load of the user list
    pub fn load_users(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.users_loading = true;
        self.users_error = None;
        self.pending_users = Some(id);
        NetworkCommand::LoadUsers { id }
    }

    // ========================
    // User selector
    // ========================

    pub fn toggle_user_selector(&mut self) {
        self.focus = Focus::Users;
        self.selector_open = !self.selector_open;
        if self.selector_open {
            self.selector_highlight = self
                .selected_user
                .as_ref()
                .and_then(|selected| self.users.iter().position(|u| u.id == selected.id))
                .unwrap_or(0);
        }
    }

    pub fn close_user_selector(&mut self) {
        self.selector_open = false;
    }

    pub fn selector_up(&mut self) {
        self.selector_highlight = self.selector_highlight.saturating_sub(1);
    }

    pub fn selector_down(&mut self) {
        if self.selector_highlight + 1 < self.users.len() {
            self.selector_highlight += 1;
        }
    }

    /// Select a user by id.
    ///
    /// Clears the posts, post selection, and comments. An unknown id leaves
    /// no user selected and issues nothing.
    pub fn select_user(&mut self, user_id: u64) -> Option<NetworkCommand> {
        self.selector_open = false;
        self.selected_user = self.users.iter().find(|u| u.id == user_id).cloned();

        self.posts.clear();
        self.post_cursor = 0;
        self.posts_error = None;
        self.select_post(None);

        if self.selected_user.is_none() {
            tracing::debug!(user_id, "Selected user is not in the loaded list");
            self.posts_loading = false;
            self.pending_posts = None;
            return None;
        }

        let id = self.next_id();
        self.posts_loading = true;
        self.pending_posts = Some(id);
        Some(NetworkCommand::LoadPosts { id, user_id })
    }

    // ========================
    // Posts list
    // ========================

    pub fn post_cursor_up(&mut self) {
        self.post_cursor = self.post_cursor.saturating_sub(1);
    }

    pub fn post_cursor_down(&mut self) {
        if self.post_cursor + 1 < self.posts.len() {
            self.post_cursor += 1;
        }
    }

    pub fn open_post(&mut self, post_id: u64) -> Option<NetworkCommand> {
        if let Some(index) = self.posts.iter().position(|p| p.id == post_id) {
            self.post_cursor = index;
        }
        self.select_post(Some(post_id))
    }

    pub fn close_post(&mut self) -> Option<NetworkCommand> {
        self.select_post(None)
    }

    /// Replace the selected post.
    ///
    /// A change clears the comments and resets the form; selecting a post
    /// issues a comments fetch, deselecting issues nothing.
    pub fn select_post(&mut self, post_id: Option<u64>) -> Option<NetworkCommand> {
        let post = post_id.and_then(|id| self.posts.iter().find(|p| p.id == id).cloned());
        if post.is_some() && post.as_ref().map(|p| p.id) == self.selected_post_id() {
            return None;
        }

        self.selected_post = post;
        self.comments.clear();
        self.comment_cursor = 0;
        self.show_form = false;
        self.form = CommentForm::new();
        self.pending_create = None;
        if self.focus == Focus::Form {
            self.focus = Focus::Comments;
        }

        let Some(post_id) = self.selected_post_id() else {
            self.comments_loading = false;
            self.pending_comments = None;
            return None;
        };

        let id = self.next_id();
        self.comments_loading = true;
        self.comments_error = None;
        self.pending_comments = Some(PendingLoad { id, resync: false });
        Some(NetworkCommand::LoadComments { id, post_id })
    }

    // ========================
    // Comments
    // ========================

    pub fn comment_cursor_up(&mut self) {
        self.comment_cursor = self.comment_cursor.saturating_sub(1);
    }

    pub fn comment_cursor_down(&mut self) {
        if self.comment_cursor + 1 < self.comments.len() {
            self.comment_cursor += 1;
        }
    }

    /// Remove a comment right away, then ask the server to delete it
    pub fn delete_comment(&mut self, comment_id: u64) -> Option<NetworkCommand> {
        let post_id = self.selected_post_id()?;

        self.comments.retain(|c| c.id != comment_id);
        self.comment_cursor = self
            .comment_cursor
            .min(self.comments.len().saturating_sub(1));

        let id = self.next_id();
        Some(NetworkCommand::DeleteComment {
            id,
            post_id,
            comment_id,
        })
    }

    // ========================
    // Comment form
    // ========================

    pub fn show_comment_form(&mut self) {
        if self.selected_post.is_none() {
            return;
        }
        self.show_form = true;
        self.focus = Focus::Form;
    }

    pub fn leave_form(&mut self) {
        self.focus = Focus::Comments;
    }

    pub fn form_char(&mut self, c: char) {
        self.form.push_char(c);
    }

    pub fn form_backspace(&mut self) {
        self.form.backspace();
    }

    pub fn form_next_field(&mut self) {
        self.form.next_field();
    }

    pub fn form_prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn focus_field(&mut self, field: FormField) {
        if self.show_form {
            self.focus = Focus::Form;
            self.form.active_field = field;
        }
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Validate the form and, if every field is filled in, issue the create.
    ///
    /// Nothing is inserted locally until the server answers.
    pub fn submit_comment(&mut self) -> Option<NetworkCommand> {
        if !self.show_form {
            return None;
        }
        let post_id = self.selected_post_id()?;
        let draft = self.form.validate()?;

        // A retry replaces the message left by the previous failed add
        if self.comments_error.as_deref() == Some(COMMENT_ADD_ERROR) {
            self.comments_error = None;
        }

        let id = self.next_id();
        self.form.submitting = true;
        self.pending_create = Some(id);
        Some(NetworkCommand::CreateComment { id, post_id, draft })
    }

    // ========================
    // Errors and popups
    // ========================

    pub fn dismiss_error(&mut self) {
        match self.focus {
            Focus::Users => self.users_error = None,
            Focus::Posts => self.posts_error = None,
            Focus::Comments | Focus::Form => self.comments_error = None,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a network response; may return a follow-up command.
    ///
    /// Responses for superseded requests are dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::Users { id, result } => {
                if self.pending_users != Some(id) {
                    tracing::debug!(id, "Dropping stale users response");
                    return None;
                }
                self.pending_users = None;
                self.users_loading = false;
                match result {
                    Ok(users) => self.users = users,
                    Err(_) => self.users_error = Some(USERS_LOAD_ERROR.to_string()),
                }
                None
            }

            NetworkResponse::Posts { id, user_id, result } => {
                if self.pending_posts != Some(id) {
                    tracing::debug!(id, user_id, "Dropping stale posts response");
                    return None;
                }
                self.pending_posts = None;
                self.posts_loading = false;
                match result {
                    Ok(posts) => {
                        self.posts = posts;
                        self.post_cursor = 0;
                    }
                    Err(_) => self.posts_error = Some(POSTS_LOAD_ERROR.to_string()),
                }
                None
            }

            NetworkResponse::Comments { id, post_id, result } => {
                let Some(pending) = self.pending_comments.filter(|p| p.id == id) else {
                    tracing::debug!(id, post_id, "Dropping stale comments response");
                    return None;
                };
                self.pending_comments = None;
                self.comments_loading = false;
                match result {
                    Ok(comments) => {
                        self.comments = comments;
                        self.comment_cursor = self
                            .comment_cursor
                            .min(self.comments.len().saturating_sub(1));
                    }
                    // A failed resync keeps the delete error already shown
                    Err(_) if pending.resync => {}
                    Err(_) => self.comments_error = Some(COMMENTS_LOAD_ERROR.to_string()),
                }
                None
            }

            NetworkResponse::CommentCreated { id, post_id, result } => {
                if self.pending_create != Some(id) {
                    tracing::debug!(id, post_id, "Dropping stale comment creation");
                    return None;
                }
                self.pending_create = None;
                match result {
                    Ok(comment) => {
                        if self.selected_post_id() == Some(comment.post_id)
                            || self.selected_post_id() == Some(post_id)
                        {
                            self.comments.push(comment);
                        }
                        self.form.submitted();
                    }
                    Err(_) => {
                        self.comments_error = Some(COMMENT_ADD_ERROR.to_string());
                        self.form.submit_failed();
                    }
                }
                None
            }

            NetworkResponse::CommentDeleted {
                id,
                post_id,
                comment_id,
                result,
            } => {
                if result.is_ok() {
                    return None;
                }
                if self.selected_post_id() != Some(post_id) {
                    tracing::debug!(id, post_id, comment_id, "Delete failed for a post no longer shown");
                    return None;
                }

                self.comments_error = Some(COMMENT_DELETE_ERROR.to_string());
                let id = self.next_id();
                self.pending_comments = Some(PendingLoad { id, resync: true });
                Some(NetworkCommand::LoadComments { id, post_id })
            }
        }
    }
}
