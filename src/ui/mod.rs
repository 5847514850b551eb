//! UI layer - draws a `RenderState` and records clickable regions

pub mod details;
pub mod pointer;
pub mod posts;
pub mod selector;

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;

pub use pointer::{mouse_to_ui_events, PointerListeners, Regions};
pub use selector::UserSelectorView;

pub const LOADING: &str = "Loading...";

/// Draw one frame. `regions` is rebuilt from scratch.
pub fn draw_ui(f: &mut Frame, state: &RenderState, regions: &mut Regions) {
    regions.clear();
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // User selector
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let trigger = selector::draw_trigger(f, state, main_chunks[0], regions);
    draw_title(f, main_chunks[0], trigger);

    let content = if state.selected_post.is_some() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(main_chunks[1])
    };

    posts::draw_main(f, state, content[0], regions);
    if let Some(sidebar) = content.get(1) {
        details::draw_details(f, state, *sidebar, regions);
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Overlays go last so their targets win hit tests
    selector::draw_dropdown(f, state, trigger, area, regions);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title(f: &mut Frame, row: Rect, trigger: Rect) {
    let x = trigger.x + trigger.width + 2;
    if x >= row.x + row.width {
        return;
    }
    let rect = Rect::new(x, row.y + 1, row.x + row.width - x, 1);
    let title = Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Cyan).bold());
    f.render_widget(Paragraph::new(Line::from(title).right_aligned()), rect);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.users_loading || state.posts_loading || state.comments_loading {
        " Loading... "
    } else if state.form.submitting {
        " Adding comment... "
    } else {
        match state.focus {
            Focus::Users if state.selector_open => " ↑/↓:choose | Enter:select | Esc:close ",
            Focus::Users => " Enter:choose user | Tab:next | ?:help | q:quit ",
            Focus::Posts => " ↑/↓:move | Enter:open/close | Tab:next | ?:help | q:quit ",
            Focus::Comments => " ↑/↓:move | d:delete | w:write | Esc:dismiss error | q:quit ",
            Focus::Form => " Tab:next field | Alt+Enter:new line | Ctrl+S:add | Ctrl+R:clear | Esc:leave form ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 POSTBOARD - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch region
   ↑ / ↓              Move within a list
   Esc                Dismiss the region's error

 USERS
   Enter / Space      Open the user list
   Enter              Select highlighted user

 POSTS
   Enter / o          Open or close the post

 COMMENTS
   d / Delete         Delete comment
   w                  Write a comment

 COMMENT FORM
   Tab / Enter        Next field (Enter on text adds)
   Alt+Enter          New line in the text
   Ctrl+S             Add
   Ctrl+R             Clear
   Esc                Leave the form

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Border style for a region that may hold focus
pub fn focus_border(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Inline notification in a region
pub fn notice(message: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(Span::styled(message, Style::default().fg(color).bold()))
        .wrap(Wrap { trim: false })
}

/// Count of cells or lines, saturating at the terminal coordinate range
pub fn cell_count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
