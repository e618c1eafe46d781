//! Row selection and cursor movement

use crate::App;
use filedeck::logic::selection::CheckState;

impl App {
    /// Flip the checkbox of the row under the cursor
    pub(crate) fn toggle_cursor_row(&mut self) {
        let Some(id) = self.model.table.cursor_row().map(|row| row.id.clone()) else {
            return;
        };
        let value = !self.model.table.is_selected(&id);
        self.model.table.toggle_row_selected(&id, value);
    }

    /// Header checkbox: select every visible row unless all already are
    pub(crate) fn toggle_all_visible(&mut self) {
        let value = self.model.table.header_check_state() != CheckState::Checked;
        self.model.table.toggle_all_visible_selected(value);
    }

    pub(crate) fn next_row(&mut self) {
        self.model.table.move_cursor(1);
    }

    pub(crate) fn previous_row(&mut self) {
        self.model.table.move_cursor(-1);
    }

    pub(crate) fn page_down(&mut self) {
        self.model.table.move_cursor(self.page_size as isize);
    }

    pub(crate) fn page_up(&mut self) {
        self.model.table.move_cursor(-(self.page_size as isize));
    }

    pub(crate) fn half_page_down(&mut self) {
        self.model.table.move_cursor((self.page_size / 2).max(1) as isize);
    }

    pub(crate) fn half_page_up(&mut self) {
        self.model.table.move_cursor(-((self.page_size / 2).max(1) as isize));
    }

    pub(crate) fn jump_to_first(&mut self) {
        self.model.table.cursor_to_start();
    }

    pub(crate) fn jump_to_last(&mut self) {
        self.model.table.cursor_to_end();
    }
}
