//! Searchable axis menu.
//!
//! A text box with a dropdown list of axis names. Opening clears the query,
//! typing filters by label, and the arrow keys move a highlight that starts
//! on the current selection.

use serde::Serialize;

use super::PointerEvent;

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub value: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// A committed choice. `index` is the position in the full item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSelection {
    pub index: usize,
    pub item: MenuItem,
}

/// Keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        /// Position within the visible (filtered) items
        highlight: Option<usize>,
        query: String,
    },
}

/// Dropdown list with type-to-filter and keyboard navigation.
#[derive(Debug, Clone, Default)]
pub struct ListSearch {
    items: Vec<MenuItem>,
    selected: Option<usize>,
    state: MenuState,
}

impl ListSearch {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items, selected: None, state: MenuState::Closed }
    }

    /// Preselect the item whose value or label equals `value`.
    pub fn with_value(mut self, value: &str) -> Self {
        self.select_value(value);
        self
    }

    /// Select the item whose value or label equals `value`, or clear the
    /// selection when none does. The open/closed state is unchanged.
    pub fn select_value(&mut self, value: &str) -> Option<MenuSelection> {
        self.selected = self.items.iter().position(|i| i.value == value || i.label == value);
        self.selected.map(|index| MenuSelection { index, item: self.items[index].clone() })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Text shown in place of the input while the menu is closed.
    pub fn label(&self) -> Option<&str> {
        if self.is_open() {
            return None;
        }
        self.selected().map(|item| item.label.as_str())
    }

    pub fn query(&self) -> &str {
        match &self.state {
            MenuState::Open { query, .. } => query,
            MenuState::Closed => "",
        }
    }

    pub fn highlight(&self) -> Option<usize> {
        match &self.state {
            MenuState::Open { highlight, .. } => *highlight,
            MenuState::Closed => None,
        }
    }

    /// Full-list indices of the items matching the current query.
    fn visible_indices(&self) -> Vec<usize> {
        let query = self.query().to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| query.is_empty() || item.label.to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect()
    }

    /// Items listed in the open menu; empty while closed.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        if !self.is_open() {
            return Vec::new();
        }
        self.visible_indices().into_iter().map(|i| &self.items[i]).collect()
    }

    fn open(&mut self) {
        if self.is_open() {
            return;
        }
        let highlight = self.selected;
        self.state = MenuState::Open { highlight, query: String::new() };
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    pub fn focus(&mut self) {
        self.open();
    }

    pub fn blur(&mut self) {
        self.close();
    }

    /// Opens the menu; clicking again while open keeps it open.
    pub fn click_icon(&mut self, event: &mut PointerEvent) {
        event.stop_propagation();
        self.open();
    }

    pub fn click_label(&mut self, event: &mut PointerEvent) {
        event.stop_propagation();
        self.open();
    }

    /// Page-level click. Ignored when a menu handler already consumed it.
    pub fn outside_click(&mut self, event: &PointerEvent) {
        if !event.is_propagation_stopped() {
            self.close();
        }
    }

    /// Replace the filter text. Resets the highlight.
    pub fn type_query(&mut self, text: &str) {
        self.open();
        if let MenuState::Open { highlight, query } = &mut self.state {
            *query = text.to_string();
            *highlight = None;
        }
    }

    pub fn key_up(&mut self, key: Key) -> Option<MenuSelection> {
        if !self.is_open() {
            return None;
        }
        let visible = self.visible_indices();
        match key {
            Key::Escape => {
                self.close();
                None
            }
            Key::Enter => {
                let pos = self.highlight()?;
                self.click_item(pos)
            }
            Key::ArrowDown | Key::ArrowUp => {
                if visible.is_empty() {
                    return None;
                }
                let last = visible.len() - 1;
                let current = self.highlight().map(|h| h.min(last));
                let next = match (key, current) {
                    (Key::ArrowDown, None) => 0,
                    (Key::ArrowDown, Some(h)) => (h + 1).min(last),
                    (_, None) => 0,
                    (_, Some(h)) => h.saturating_sub(1),
                };
                if let MenuState::Open { highlight, .. } = &mut self.state {
                    *highlight = Some(next);
                }
                None
            }
        }
    }

    /// Select the item at `position` among the visible items and close.
    pub fn click_item(&mut self, position: usize) -> Option<MenuSelection> {
        let index = *self.visible_indices().get(position)?;
        self.selected = Some(index);
        self.close();
        log::debug!("menu selected '{}'", self.items[index].label);
        Some(MenuSelection { index, item: self.items[index].clone() })
    }
}
