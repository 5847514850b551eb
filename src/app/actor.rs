//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Users are loaded once, at startup
        let cmd = self.state.load_users();
        self.send(Some(cmd));
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    let follow_up = self.state.handle_response(response);
                    self.send(follow_up);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),
            UiEvent::Focus(focus) => self.state.set_focus(focus),

            // User selector
            UiEvent::ToggleUserSelector => self.state.toggle_user_selector(),
            UiEvent::CloseUserSelector => self.state.close_user_selector(),
            UiEvent::SelectorUp => self.state.selector_up(),
            UiEvent::SelectorDown => self.state.selector_down(),
            UiEvent::SelectUser(id) => {
                let cmd = self.state.select_user(id);
                self.send(cmd);
            }

            // Posts
            UiEvent::PostCursorUp => self.state.post_cursor_up(),
            UiEvent::PostCursorDown => self.state.post_cursor_down(),
            UiEvent::OpenPost(id) => {
                let cmd = self.state.open_post(id);
                self.send(cmd);
            }
            UiEvent::ClosePost => {
                let cmd = self.state.close_post();
                self.send(cmd);
            }

            // Comments
            UiEvent::CommentCursorUp => self.state.comment_cursor_up(),
            UiEvent::CommentCursorDown => self.state.comment_cursor_down(),
            UiEvent::DeleteComment(id) => {
                let cmd = self.state.delete_comment(id);
                self.send(cmd);
            }
            UiEvent::ShowCommentForm => self.state.show_comment_form(),

            // Form
            UiEvent::FormChar(c) => self.state.form_char(c),
            UiEvent::FormBackspace => self.state.form_backspace(),
            UiEvent::FormNextField => self.state.form_next_field(),
            UiEvent::FormPrevField => self.state.form_prev_field(),
            UiEvent::FocusField(field) => self.state.focus_field(field),
            UiEvent::SubmitComment => {
                let cmd = self.state.submit_comment();
                self.send(cmd);
            }
            UiEvent::ResetForm => self.state.reset_form(),
            UiEvent::LeaveForm => self.state.leave_form(),

            UiEvent::DismissError => self.state.dismiss_error(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
