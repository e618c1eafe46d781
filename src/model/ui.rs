//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the filter input, popup menus and toasts.

use std::time::Instant;

use super::types::MenuState;
use crate::TimestampMode;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// How the last-modified column is shown
    pub timestamp_mode: TimestampMode,

    // ============================================
    // FILTER INPUT
    // ============================================
    /// Whether the filter input is receiving keystrokes
    pub filter_mode: bool,

    // ============================================
    // POPUPS
    // ============================================
    /// Open popup menu (row actions, add new, sort, breadcrumb)
    pub menu: Option<MenuState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, timestamp_mode: TimestampMode) -> Self {
        Self {
            vim_mode,
            timestamp_mode,
            filter_mode: false,
            menu: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any popup or input currently captures keys
    pub fn has_modal(&self) -> bool {
        self.menu.is_some() || self.filter_mode
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
