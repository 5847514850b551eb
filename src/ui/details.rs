//! Post details sidebar - the selected post, its comments, and the form

use ratatui::{prelude::*, widgets::*};

use crate::messages::render::CommentsView;
use crate::messages::ui_events::{Focus, FormField};
use crate::messages::{RenderState, UiEvent};
use crate::models::Post;
use crate::ui::pointer::Regions;
use crate::ui::{cell_count, focus_border, notice, LOADING};

const FORM_HEIGHT: u16 = 12;
const DELETE_MARKER: &str = "[x]";
const WRITE_BUTTON: &str = "[ Write a comment ]";

pub fn draw_details(f: &mut Frame, state: &RenderState, area: Rect, regions: &mut Regions) {
    let Some(post) = &state.selected_post else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(matches!(state.focus, Focus::Comments | Focus::Form)))
        .title(" Post details ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let body_height = wrapped_height(&post.body, inner.width).min(6);
    let form_height = if state.show_form { FORM_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(body_height),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(form_height),
        ])
        .split(inner);

    draw_post(f, post, chunks[0], chunks[1]);
    draw_comments(f, state, chunks[3], regions);
    if state.show_form {
        draw_form(f, state, chunks[4], regions);
    }
}

fn draw_post(f: &mut Frame, post: &Post, title_area: Rect, body_area: Rect) {
    let title = Line::from(format!("#{}: {}", post.id, post.title)).bold();
    f.render_widget(Paragraph::new(title), title_area);
    f.render_widget(
        Paragraph::new(post.body.as_str()).wrap(Wrap { trim: false }),
        body_area,
    );
}

fn draw_comments(f: &mut Frame, state: &RenderState, area: Rect, regions: &mut Regions) {
    let write_height = if state.can_write_comment() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(write_height),
        ])
        .split(area);

    match state.comments_view() {
        CommentsView::Loading => {
            f.render_widget(Paragraph::new(LOADING), chunks[0]);
        }
        CommentsView::Error(message) => {
            f.render_widget(notice(message, Color::Red), chunks[0]);
        }
        CommentsView::Empty => {
            f.render_widget(Paragraph::new(Span::raw("No comments yet").bold()), chunks[0]);
        }
        CommentsView::List => {
            f.render_widget(Paragraph::new(Span::raw("Comments:").bold()), chunks[0]);
            draw_comment_list(f, state, chunks[1], regions);
        }
    }

    if state.can_write_comment() {
        let width = (WRITE_BUTTON.len() as u16).min(chunks[2].width);
        let rect = Rect::new(chunks[2].x, chunks[2].y, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(WRITE_BUTTON, Style::default().fg(Color::Blue).bold())),
            rect,
        );
        regions.add_target(rect, UiEvent::ShowCommentForm);
    }
}

fn draw_comment_list(f: &mut Frame, state: &RenderState, area: Rect, regions: &mut Regions) {
    // Two lines per comment: author, then body
    let visible = (area.height / 2) as usize;
    let offset = state.comment_cursor.saturating_sub(visible.saturating_sub(1));
    let is_focused = state.focus == Focus::Comments;
    let marker_width = DELETE_MARKER.len() as u16;

    for (row, (i, comment)) in state
        .comments
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let y = area.y + (row as u16) * 2;
        let header = Rect::new(area.x, y, area.width, 1);
        let body = Rect::new(area.x, y + 1, area.width, 1);

        let header_style = if is_focused && i == state.comment_cursor {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let author = Line::from(vec![
            Span::styled(
                comment.name.clone(),
                Style::default().fg(Color::Cyan).underlined(),
            ),
            Span::styled(
                format!(" <mailto:{}>", comment.email),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(author).style(header_style), header);
        f.render_widget(Paragraph::new(comment.body.as_str()), body);

        let marker = Rect::new(
            header.x + header.width.saturating_sub(marker_width),
            y,
            marker_width.min(header.width),
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(DELETE_MARKER, Style::default().fg(Color::Red))),
            marker,
        );
        regions.add_target(marker, UiEvent::DeleteComment(comment.id));
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect, regions: &mut Regions) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    for (field, rect) in FormField::ALL.into_iter().zip(chunks.iter().copied()) {
        draw_field(f, state, field, rect);
        regions.add_target(rect, UiEvent::FocusField(field));
    }

    let buttons = chunks[3];
    let submit_label = if state.form.submitting { "[ Adding... ]" } else { "[ Add ]" };
    let submit = Rect::new(buttons.x, buttons.y, submit_label.len() as u16, 1);
    let clear_label = "[ Clear ]";
    let clear = Rect::new(
        submit.x + submit.width + 1,
        buttons.y,
        clear_label.len() as u16,
        1,
    );
    let line = Line::from(vec![
        Span::styled(submit_label, Style::default().fg(Color::Black).bg(Color::Blue)),
        Span::raw(" "),
        Span::styled(clear_label, Style::default().fg(Color::Blue)),
    ]);
    f.render_widget(Paragraph::new(line), buttons);
    regions.add_target(submit.intersection(buttons), UiEvent::SubmitComment);
    regions.add_target(clear.intersection(buttons), UiEvent::ResetForm);
}

fn draw_field(f: &mut Frame, state: &RenderState, field: FormField, area: Rect) {
    let is_active = state.focus == Focus::Form && state.form.active_field == field;
    let error = state.form.error(field);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label()));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(format!(" {} ", message)).style(Style::default().fg(Color::Red)));
    }

    let value = state.form.value(field);
    let content = if value.is_empty() {
        Paragraph::new(Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)))
    } else {
        Paragraph::new(value)
    };
    let inner = block.inner(area);
    f.render_widget(content.block(block).wrap(Wrap { trim: false }), area);

    if is_active {
        let last_line = value.rsplit('\n').next().unwrap_or("");
        let max_x = inner.x + inner.width.saturating_sub(1);
        let cursor_x = inner
            .x
            .saturating_add(cell_count(last_line.chars().count()))
            .min(max_x);
        let max_y = inner.y + inner.height.saturating_sub(1);
        let cursor_y = inner
            .y
            .saturating_add(cell_count(value.matches('\n').count()))
            .min(max_y);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Lines needed for `text` wrapped at `width`
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let lines = text
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .max(1);
    cell_count(lines)
}
