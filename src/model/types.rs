//! Shared types for the Model

use crate::logic::menu::{MenuAction, MenuEntry};
use crate::logic::navigation;

/// Where a row menu was opened from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAnchor {
    /// "⋯" button in the actions column
    Dropdown,
    /// Context menu on the row itself
    Context,
}

/// Which menu is open
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuKind {
    RowActions { row_id: String, anchor: MenuAnchor },
    AddNew,
    Sort,
    Breadcrumb,
}

/// An open popup menu
#[derive(Clone, Debug)]
pub struct MenuState {
    pub kind: MenuKind,
    pub title: String,
    pub entries: Vec<MenuEntry>,
    pub selected_index: Option<usize>,
}

impl MenuState {
    pub fn new(kind: MenuKind, title: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        let selected_index = navigation::first_menu_item(&entries);
        Self {
            kind,
            title: title.into(),
            entries,
            selected_index,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected_index {
            self.selected_index = navigation::step_menu_item(&self.entries, idx, true);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(idx) = self.selected_index {
            self.selected_index = navigation::step_menu_item(&self.entries, idx, false);
        }
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.selected_index
            .and_then(|idx| self.entries.get(idx))
            .and_then(|entry| entry.action())
    }
}
