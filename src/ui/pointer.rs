//! Pointer handling - hit regions and document-level listeners
//!
//! Every frame the draw functions record where clickable things ended up.
//! A mouse-down is first offered to the document listeners (click-outside
//! detection), then mapped to the topmost target under the pointer.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::messages::UiEvent;

/// Identifies a component's root area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
    UserSelector,
}

/// Clickable areas of the last rendered frame
#[derive(Debug, Default)]
pub struct Regions {
    roots: Vec<(RegionId, Rect)>,
    targets: Vec<(Rect, UiEvent)>,
}

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.roots.clear();
        self.targets.clear();
    }

    /// Extend a component's root area; repeated calls union the rects
    pub fn add_root(&mut self, id: RegionId, rect: Rect) {
        match self.roots.iter_mut().find(|(root, _)| *root == id) {
            Some((_, existing)) => *existing = existing.union(rect),
            None => self.roots.push((id, rect)),
        }
    }

    pub fn root(&self, id: RegionId) -> Option<Rect> {
        self.roots
            .iter()
            .find(|(root, _)| *root == id)
            .map(|(_, rect)| *rect)
    }

    pub fn add_target(&mut self, rect: Rect, event: UiEvent) {
        self.targets.push((rect, event));
    }

    /// Topmost target at a cell; later targets are drawn above earlier ones
    pub fn target_at(&self, column: u16, row: u16) -> Option<UiEvent> {
        self.targets
            .iter()
            .rev()
            .find(|(rect, _)| contains(*rect, column, row))
            .map(|(_, event)| event.clone())
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Handle returned by `PointerListeners::subscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

#[derive(Debug)]
struct Listener {
    root: RegionId,
    on_outside: UiEvent,
}

/// Document-level mouse-down listeners
#[derive(Debug, Default)]
pub struct PointerListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `on_outside` for every mouse-down outside `root`
    pub fn subscribe(&mut self, root: RegionId, on_outside: UiEvent) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Listener { root, on_outside }));
        tracing::debug!(?id, ?root, "Pointer listener added");
        id
    }

    /// Returns false if the listener was already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(?id, "Pointer listener removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Events produced by the listeners for a mouse event
    pub fn dispatch(&self, event: &MouseEvent, regions: &Regions) -> Vec<UiEvent> {
        if !matches!(event.kind, MouseEventKind::Down(_)) {
            return Vec::new();
        }

        self.listeners
            .iter()
            .filter(|(_, listener)| {
                regions
                    .root(listener.root)
                    .map_or(true, |rect| !contains(rect, event.column, event.row))
            })
            .map(|(_, listener)| listener.on_outside.clone())
            .collect()
    }
}

/// Map a mouse event to the UI events it triggers
pub fn mouse_to_ui_events(
    event: &MouseEvent,
    listeners: &PointerListeners,
    regions: &Regions,
) -> Vec<UiEvent> {
    let mut events = listeners.dispatch(event, regions);
    if matches!(event.kind, MouseEventKind::Down(_)) {
        events.extend(regions.target_at(event.column, event.row));
    }
    events
}
