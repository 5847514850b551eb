//! Main region - loading/error notices and the posts table

use ratatui::{prelude::*, widgets::*};

use crate::messages::render::MainView;
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::ui::pointer::Regions;
use crate::ui::{focus_border, notice, LOADING};

const BUTTON_WIDTH: u16 = 9;

pub fn draw_main(f: &mut Frame, state: &RenderState, area: Rect, regions: &mut Regions) {
    let is_focused = state.focus == Focus::Posts;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(is_focused))
        .title(" Posts ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match state.main_view() {
        MainView::UsersLoading | MainView::PostsLoading => {
            f.render_widget(Paragraph::new(LOADING), inner);
        }
        MainView::UsersError(message) | MainView::PostsError(message) => {
            f.render_widget(notice(message, Color::Red), inner);
        }
        MainView::NoUserSelected => {
            f.render_widget(Paragraph::new("No user selected"), inner);
        }
        MainView::NoPosts => {
            f.render_widget(notice("No posts yet", Color::Yellow), inner);
        }
        MainView::Posts => draw_posts_table(f, state, inner, is_focused, regions),
    }
}

fn draw_posts_table(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    is_focused: bool,
    regions: &mut Regions,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    f.render_widget(Paragraph::new(Span::raw("Posts:").bold()), chunks[0]);

    let table_area = chunks[1];
    // One line for the table header
    let visible = table_area.height.saturating_sub(1) as usize;
    let offset = state.post_cursor.saturating_sub(visible.saturating_sub(1));
    let selected_id = state.selected_post_id();

    let rows: Vec<Row> = state
        .posts
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, post)| {
            let is_open = selected_id == Some(post.id);
            let button = if is_open {
                Span::styled("[ Close ]", Style::default().fg(Color::Black).bg(Color::Blue))
            } else {
                Span::styled("[ Open ]", Style::default().fg(Color::Blue))
            };
            let mut style = Style::default();
            if is_open {
                style = style.bold();
            }
            if is_focused && i == state.post_cursor {
                style = style.bg(Color::DarkGray);
            }
            Row::new(vec![
                Cell::from(post.id.to_string()),
                Cell::from(post.title.clone()),
                Cell::from(Line::from(button).right_aligned()),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["#", "Title", ""])
        .style(Style::default().fg(Color::Blue).bold());
    let widths = [
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Length(BUTTON_WIDTH),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, table_area);

    let button_x = table_area.x + table_area.width.saturating_sub(BUTTON_WIDTH);
    for (row, post) in state.posts.iter().skip(offset).take(visible).enumerate() {
        let rect = Rect::new(button_x, table_area.y + 1 + row as u16, BUTTON_WIDTH, 1);
        regions.add_target(rect, state.post_toggle_event(post.id));
    }
}
