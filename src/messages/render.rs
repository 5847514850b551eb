//! Render state - data structure sent from App layer to UI for rendering

use crate::app::form::CommentForm;
use crate::messages::ui_events::{Focus, UiEvent};
use crate::models::{Comment, Post, User};

/// What the main (posts) region shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MainView<'a> {
    UsersLoading,
    UsersError(&'a str),
    NoUserSelected,
    PostsLoading,
    PostsError(&'a str),
    NoPosts,
    Posts,
}

/// What the comments block of the post details shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommentsView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub focus: Focus,

    // Users
    pub users: Vec<User>,
    pub users_loading: bool,
    pub users_error: Option<String>,
    pub selected_user: Option<User>,
    pub selector_open: bool,
    pub selector_highlight: usize,

    // Posts
    pub posts: Vec<Post>,
    pub posts_loading: bool,
    pub posts_error: Option<String>,
    pub selected_post: Option<Post>,
    pub post_cursor: usize,

    // Comments
    pub comments: Vec<Comment>,
    pub comments_loading: bool,
    pub comments_error: Option<String>,
    pub comment_cursor: usize,

    // Comment form
    pub show_form: bool,
    pub form: CommentForm,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn selected_post_id(&self) -> Option<u64> {
        self.selected_post.as_ref().map(|post| post.id)
    }

    /// Event a post row's toggle emits: close the open post, open any other
    pub fn post_toggle_event(&self, post_id: u64) -> UiEvent {
        if self.selected_post_id() == Some(post_id) {
            UiEvent::ClosePost
        } else {
            UiEvent::OpenPost(post_id)
        }
    }

    /// Label on the user selector trigger
    pub fn selector_label(&self) -> &str {
        match &self.selected_user {
            Some(user) if !user.name.is_empty() => &user.name,
            _ => "Choose a user",
        }
    }

    pub fn main_view(&self) -> MainView<'_> {
        if self.users_loading {
            return MainView::UsersLoading;
        }
        if let Some(error) = &self.users_error {
            return MainView::UsersError(error);
        }
        if self.selected_user.is_none() {
            return MainView::NoUserSelected;
        }
        if self.posts_loading {
            return MainView::PostsLoading;
        }
        if let Some(error) = &self.posts_error {
            return MainView::PostsError(error);
        }
        if self.posts.is_empty() {
            MainView::NoPosts
        } else {
            MainView::Posts
        }
    }

    /// Loading, then error, then empty, then the list
    pub fn comments_view(&self) -> CommentsView<'_> {
        if self.comments_loading {
            CommentsView::Loading
        } else if let Some(error) = &self.comments_error {
            CommentsView::Error(error)
        } else if self.comments.is_empty() {
            CommentsView::Empty
        } else {
            CommentsView::List
        }
    }

    /// Whether the "Write a comment" action is offered
    pub fn can_write_comment(&self) -> bool {
        self.selected_post.is_some()
            && !self.comments_loading
            && self.comments_error.is_none()
            && !self.show_form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            user_id: 1,
            title: "T".into(),
            body: "B".into(),
        }
    }

    #[test]
    fn test_comments_view_priority() {
        let mut state = RenderState {
            selected_post: Some(post(10)),
            ..Default::default()
        };
        assert_eq!(state.comments_view(), CommentsView::Empty);

        state.comments_error = Some("Something went wrong".into());
        assert_eq!(
            state.comments_view(),
            CommentsView::Error("Something went wrong")
        );

        state.comments_loading = true;
        assert_eq!(state.comments_view(), CommentsView::Loading);
    }

    #[test]
    fn test_posts_error_does_not_hide_selector_state() {
        let state = RenderState {
            users: vec![User::new(1, "Alice")],
            selected_user: Some(User::new(1, "Alice")),
            posts_error: Some("Something went wrong".into()),
            ..Default::default()
        };
        assert_eq!(state.main_view(), MainView::PostsError("Something went wrong"));
        assert_eq!(state.selector_label(), "Alice");
    }

    #[test]
    fn test_selector_label_falls_back_for_empty_name() {
        let mut state = RenderState::default();
        assert_eq!(state.selector_label(), "Choose a user");
        state.selected_user = Some(User::new(3, ""));
        assert_eq!(state.selector_label(), "Choose a user");
    }

    #[test]
    fn test_write_action_hidden_while_form_open() {
        let mut state = RenderState {
            selected_post: Some(post(10)),
            ..Default::default()
        };
        assert!(state.can_write_comment());
        state.show_form = true;
        assert!(!state.can_write_comment());
    }
}
