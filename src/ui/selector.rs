//! User selector - dropdown over the loaded users

use ratatui::{prelude::*, widgets::*};

use crate::messages::ui_events::Focus;
use crate::messages::{RenderState, UiEvent};
use crate::ui::pointer::{ListenerId, PointerListeners, RegionId, Regions};
use crate::ui::{cell_count, focus_border};

/// Lifetime of the selector on screen.
///
/// Mounting subscribes the click-outside listener; unmounting removes it.
#[derive(Debug)]
pub struct UserSelectorView {
    listener: ListenerId,
}

impl UserSelectorView {
    pub fn mount(listeners: &mut PointerListeners) -> Self {
        let listener = listeners.subscribe(RegionId::UserSelector, UiEvent::CloseUserSelector);
        UserSelectorView { listener }
    }

    pub fn unmount(self, listeners: &mut PointerListeners) {
        listeners.unsubscribe(self.listener);
    }
}

const TRIGGER_WIDTH: u16 = 36;

/// Draw the trigger; the dropdown is drawn separately so it overlays
pub fn draw_trigger(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    regions: &mut Regions,
) -> Rect {
    let width = TRIGGER_WIDTH.min(area.width);
    let trigger = Rect::new(area.x, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(state.focus == Focus::Users))
        .title(" User ");

    let arrow = if state.selector_open { "▴" } else { "▾" };
    let label_style = if state.selected_user.is_some() {
        Style::default().bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::styled(state.selector_label().to_string(), label_style),
        Span::raw(" "),
        Span::raw(arrow),
    ]);
    f.render_widget(Paragraph::new(line).block(block), trigger);

    regions.add_root(RegionId::UserSelector, trigger);
    regions.add_target(trigger, UiEvent::ToggleUserSelector);
    trigger
}

/// Draw the open dropdown below the trigger at `anchor`
pub fn draw_dropdown(
    f: &mut Frame,
    state: &RenderState,
    anchor: Rect,
    screen: Rect,
    regions: &mut Regions,
) {
    if !state.selector_open {
        return;
    }

    let top = anchor.y + anchor.height;
    let available = screen.height.saturating_sub(top.saturating_sub(screen.y));
    let wanted = cell_count(state.users.len().max(1)).saturating_add(2);
    let height = wanted.min(available);
    if height < 3 {
        return;
    }
    let area = Rect::new(anchor.x, top, anchor.width.min(screen.width), height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    let visible = inner.height as usize;
    let offset = state
        .selector_highlight
        .saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = if state.users.is_empty() {
        vec![ListItem::new(Span::styled(
            "No users",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .users
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, user)| {
                let is_selected = state.selected_user.as_ref().map(|u| u.id) == Some(user.id);
                let mut style = Style::default();
                if is_selected {
                    style = style.fg(Color::Cyan).bold();
                }
                if i == state.selector_highlight {
                    style = style.bg(Color::DarkGray);
                }
                let marker = if is_selected { "• " } else { "  " };
                ListItem::new(format!("{}{}", marker, user.name)).style(style)
            })
            .collect()
    };

    f.render_widget(Clear, area);
    f.render_widget(List::new(items).block(block), area);

    regions.add_root(RegionId::UserSelector, area);
    for (row, user) in state.users.iter().skip(offset).take(visible).enumerate() {
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        regions.add_target(rect, UiEvent::SelectUser(user.id));
    }
}
