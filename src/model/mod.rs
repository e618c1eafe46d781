//! Application Model
//!
//! Owned, cloneable state for the page, split into focused sub-models:
//!
//! - **TableState**: rows, selection, sort, filter, cursor
//! - **BreadcrumbTrail**: static folder path above the table
//! - **UiModel**: preferences, filter input, menus, toasts
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted in tests
//! - No services: file operations live behind `ops::FileOperations`
//! - Passed top-down; the table is only mutated through its own methods

pub mod columns;
pub mod navigation;
pub mod table;
pub mod types;
pub mod ui;

pub use columns::{ColumnDescriptor, ColumnKind, RenderContext};
pub use navigation::{BreadcrumbSegment, BreadcrumbTrail};
pub use table::{TableBody, TableState, NO_RESULTS};
pub use types::*;
pub use ui::UiModel;

use crate::data::FileEntry;
use crate::TimestampMode;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// File table state
    pub table: TableState,

    /// Breadcrumb trail (display only)
    pub navigation: BreadcrumbTrail,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    pub fn new(
        rows: Vec<FileEntry>,
        folder_path: &[String],
        vim_mode: bool,
        timestamp_mode: TimestampMode,
    ) -> Self {
        Self {
            table: TableState::new(rows),
            navigation: BreadcrumbTrail::from_path(folder_path),
            ui: UiModel::new(vim_mode, timestamp_mode),
        }
    }

    /// Check if any popup or input currently captures keys
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let path = vec!["Folder 1".to_string(), "Folder 2".to_string()];
        let model = Model::new(Vec::new(), &path, true, TimestampMode::Absolute);
        assert_eq!(model.table.total_count(), 0);
        assert_eq!(model.navigation.full_path(), path);
        assert!(model.ui.vim_mode);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(Vec::new(), &[], false, TimestampMode::Relative);
        let _cloned = model.clone();
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(Vec::new(), &[], false, TimestampMode::Relative);
        model.show_toast("Rename: not available".to_string());
        assert!(model.ui.toast_message.is_some());

        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }
}
