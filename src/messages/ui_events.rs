//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::render::{CommentsView, RenderState};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus
    NextFocus,
    PrevFocus,
    Focus(Focus),

    // User selector
    ToggleUserSelector,
    CloseUserSelector,
    SelectorUp,
    SelectorDown,
    SelectUser(u64),

    // Posts list
    PostCursorUp,
    PostCursorDown,
    OpenPost(u64),
    ClosePost,

    // Post details
    CommentCursorUp,
    CommentCursorDown,
    DeleteComment(u64),
    ShowCommentForm,

    // Comment form
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FocusField(FormField),
    SubmitComment,
    ResetForm,
    LeaveForm,

    /// Clear the error shown in the focused region
    DismissError,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focusable screen region
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Users,
    Posts,
    Comments,
    Form,
}

impl Focus {
    /// Next region; the form only takes part while it is visible
    pub fn next(&self, form_visible: bool) -> Focus {
        match self {
            Focus::Users => Focus::Posts,
            Focus::Posts => Focus::Comments,
            Focus::Comments if form_visible => Focus::Form,
            Focus::Comments | Focus::Form => Focus::Users,
        }
    }

    pub fn prev(&self, form_visible: bool) -> Focus {
        match self {
            Focus::Users if form_visible => Focus::Form,
            Focus::Users => Focus::Comments,
            Focus::Posts => Focus::Users,
            Focus::Comments => Focus::Posts,
            Focus::Form => Focus::Comments,
        }
    }
}

/// Comment form input field
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Body,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Body];

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Body,
            FormField::Body => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Body,
            FormField::Email => FormField::Name,
            FormField::Body => FormField::Email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Author Name",
            FormField::Email => "Author Email",
            FormField::Body => "Comment Text",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name Surname",
            FormField::Email => "email@test.com",
            FormField::Body => "Type comment here",
        }
    }
}

/// Convert a key event to a UiEvent based on the current render state
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('s') if state.focus == Focus::Form => {
                return Some(UiEvent::SubmitComment)
            }
            KeyCode::Char('r') if state.focus == Focus::Form => return Some(UiEvent::ResetForm),
            _ => {}
        }
    }

    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    // The form swallows plain characters, so it is handled before globals
    if state.focus == Focus::Form {
        return handle_form_keys(key, state);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Tab => return Some(UiEvent::NextFocus),
        KeyCode::BackTab => return Some(UiEvent::PrevFocus),
        _ => {}
    }

    match state.focus {
        Focus::Users => handle_selector_keys(key, state),
        Focus::Posts => handle_posts_keys(key, state),
        Focus::Comments => handle_comments_keys(key, state),
        Focus::Form => None,
    }
}

fn handle_selector_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    if state.selector_open {
        match key.code {
            KeyCode::Up => Some(UiEvent::SelectorUp),
            KeyCode::Down => Some(UiEvent::SelectorDown),
            KeyCode::Enter | KeyCode::Char(' ') => state
                .users
                .get(state.selector_highlight)
                .map(|user| UiEvent::SelectUser(user.id)),
            KeyCode::Esc => Some(UiEvent::CloseUserSelector),
            _ => None,
        }
    } else {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                Some(UiEvent::ToggleUserSelector)
            }
            KeyCode::Esc => Some(UiEvent::DismissError),
            _ => None,
        }
    }
}

fn handle_posts_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::PostCursorUp),
        KeyCode::Down => Some(UiEvent::PostCursorDown),
        KeyCode::Enter | KeyCode::Char('o') => state
            .posts
            .get(state.post_cursor)
            .map(|post| state.post_toggle_event(post.id)),
        KeyCode::Esc => Some(UiEvent::DismissError),
        _ => None,
    }
}

fn handle_comments_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::CommentCursorUp),
        KeyCode::Down => Some(UiEvent::CommentCursorDown),
        KeyCode::Char('d') | KeyCode::Delete => {
            if state.comments_view() != CommentsView::List {
                return None;
            }
            state
                .comments
                .get(state.comment_cursor)
                .map(|comment| UiEvent::DeleteComment(comment.id))
        }
        KeyCode::Char('w') if state.can_write_comment() => Some(UiEvent::ShowCommentForm),
        KeyCode::Esc => Some(UiEvent::DismissError),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::LeaveForm),
        KeyCode::Tab => Some(UiEvent::FormNextField),
        KeyCode::BackTab => Some(UiEvent::FormPrevField),
        KeyCode::Enter
            if key.modifiers.contains(KeyModifiers::ALT)
                && state.form.active_field == FormField::Body =>
        {
            Some(UiEvent::FormChar('\n'))
        }
        KeyCode::Enter => {
            if state.form.active_field == FormField::Body {
                Some(UiEvent::SubmitComment)
            } else {
                Some(UiEvent::FormNextField)
            }
        }
        KeyCode::Backspace => Some(UiEvent::FormBackspace),
        KeyCode::Char(c) => Some(UiEvent::FormChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, Post, User};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn post(id: u64) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("Post {id}"),
            body: String::new(),
        }
    }

    #[test]
    fn test_focus_cycle_skips_hidden_form() {
        assert_eq!(Focus::Comments.next(false), Focus::Users);
        assert_eq!(Focus::Comments.next(true), Focus::Form);
        assert_eq!(Focus::Users.prev(false), Focus::Comments);
        assert_eq!(Focus::Users.prev(true), Focus::Form);
    }

    #[test]
    fn test_selector_enter_picks_highlighted_user() {
        let mut state = RenderState::default();
        state.users = vec![User::new(1, "Alice"), User::new(2, "Bob")];
        state.selector_open = true;
        state.selector_highlight = 1;
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), &state),
            Some(UiEvent::SelectUser(2))
        );

        state.selector_open = false;
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), &state),
            Some(UiEvent::ToggleUserSelector)
        );
    }

    #[test]
    fn test_post_toggle_depends_on_selection() {
        let mut state = RenderState::default();
        state.focus = Focus::Posts;
        state.posts = vec![post(10), post(11)];
        state.post_cursor = 0;
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), &state),
            Some(UiEvent::OpenPost(10))
        );

        state.selected_post = Some(post(10));
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), &state),
            Some(UiEvent::ClosePost)
        );
    }

    #[test]
    fn test_delete_only_when_list_is_shown() {
        let mut state = RenderState::default();
        state.focus = Focus::Comments;
        state.selected_post = Some(post(10));
        state.comments = vec![Comment {
            id: 5,
            post_id: 10,
            name: "Bob".into(),
            email: "b@x.com".into(),
            body: "Hi".into(),
        }];
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), &state),
            Some(UiEvent::DeleteComment(5))
        );

        state.comments_loading = true;
        assert_eq!(key_to_ui_event(press(KeyCode::Char('d')), &state), None);
    }

    #[test]
    fn test_form_captures_plain_characters() {
        let mut state = RenderState::default();
        state.focus = Focus::Form;
        state.show_form = true;
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), &state),
            Some(UiEvent::FormChar('q'))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), &state),
            Some(UiEvent::FormNextField)
        );
        state.form.active_field = FormField::Body;
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), &state),
            Some(UiEvent::SubmitComment)
        );
        assert_eq!(
            key_to_ui_event(
                KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
                &state
            ),
            Some(UiEvent::ResetForm)
        );
    }

    #[test]
    fn test_alt_enter_adds_newline_to_body_only() {
        let mut state = RenderState::default();
        state.focus = Focus::Form;
        state.show_form = true;
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);

        assert_eq!(
            key_to_ui_event(alt_enter, &state),
            Some(UiEvent::FormNextField)
        );
        state.form.active_field = FormField::Body;
        assert_eq!(
            key_to_ui_event(alt_enter, &state),
            Some(UiEvent::FormChar('\n'))
        );
    }
}
