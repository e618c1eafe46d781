//! Popup menus
//!
//! Opening, navigating and activating the row action menu (dropdown or
//! context), the "Add New" menu, the header sort menu and the breadcrumb
//! ellipsis menu. File actions go through `FileOperations`; whatever it
//! answers is shown as a toast.

use crate::App;
use filedeck::logic::menu::{self, MenuAction};
use filedeck::model::{MenuAnchor, MenuKind, MenuState};

impl App {
    // ============================================
    // OPENING
    // ============================================

    /// Open the row action menu for the row under the cursor
    pub(crate) fn open_row_menu(&mut self, anchor: MenuAnchor) {
        let Some(row) = self.model.table.cursor_row() else {
            return;
        };
        let kind = MenuKind::RowActions {
            row_id: row.id.clone(),
            anchor,
        };
        let title = row.name.clone();
        self.open_menu(MenuState::new(kind, title, menu::row_action_menu()));
    }

    pub(crate) fn open_add_new_menu(&mut self) {
        self.open_menu(MenuState::new(MenuKind::AddNew, "Add New", menu::add_new_menu()));
    }

    pub(crate) fn open_sort_menu(&mut self) {
        let entries = menu::sort_menu(&self.model.table.sortable_columns());
        self.open_menu(MenuState::new(MenuKind::Sort, "Sort", entries));
    }

    /// Ellipsis dropdown; nothing to open when no folders are collapsed
    pub(crate) fn open_breadcrumb_menu(&mut self) {
        if !self.model.navigation.has_ellipsis() {
            return;
        }
        let entries = menu::breadcrumb_menu(&self.model.navigation.collapsed);
        self.open_menu(MenuState::new(MenuKind::Breadcrumb, "", entries));
    }

    fn open_menu(&mut self, menu: MenuState) {
        tracing::debug!("Open menu {:?}", menu.kind);
        self.model.ui.filter_mode = false;
        self.model.ui.menu = Some(menu);
    }

    // ============================================
    // NAVIGATION
    // ============================================

    pub(crate) fn menu_next(&mut self) {
        if let Some(menu) = &mut self.model.ui.menu {
            menu.select_next();
        }
    }

    pub(crate) fn menu_prev(&mut self) {
        if let Some(menu) = &mut self.model.ui.menu {
            menu.select_prev();
        }
    }

    pub(crate) fn close_menu(&mut self) {
        self.model.ui.menu = None;
    }

    // ============================================
    // ACTIVATION
    // ============================================

    /// Run the highlighted entry and close the menu
    pub(crate) fn activate_menu_item(&mut self) {
        let Some(menu) = self.model.ui.menu.take() else {
            return;
        };
        let Some(action) = menu.selected_action() else {
            return;
        };

        match action {
            MenuAction::Row(row_action) => {
                let MenuKind::RowActions { row_id, .. } = &menu.kind else {
                    return;
                };
                let entry = self
                    .model
                    .table
                    .rows()
                    .iter()
                    .find(|row| &row.id == row_id)
                    .cloned();
                if let Some(entry) = entry {
                    let notice = self.operations.row_action(row_action, &entry);
                    self.model.show_toast(notice);
                }
            }
            MenuAction::AddNew(add_action) => {
                let folder_path = self.model.navigation.full_path();
                let notice = self.operations.add_new(add_action, &folder_path);
                self.model.show_toast(notice);
            }
            MenuAction::Sort(column, direction) => {
                self.model.table.set_sort(column, direction);
            }
            MenuAction::ClearSort => {
                self.model.table.clear_sort();
            }
            MenuAction::Breadcrumb(idx) => {
                // The trail is a display fixture
                tracing::debug!(
                    "Breadcrumb entry {:?} chosen",
                    self.model.navigation.collapsed.get(idx)
                );
            }
        }
    }
}
