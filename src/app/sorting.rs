//! Sorting orchestration methods
//!
//! Column sort is cycled from the keyboard or picked from the header sort
//! menu. The cursor stays on the same row across reorders.

use crate::App;
use filedeck::ColumnId;

impl App {
    pub(crate) fn cycle_sort(&mut self, column: ColumnId) {
        self.model.table.toggle_sort(column);
        match self.model.table.sort() {
            Some((active, direction)) => {
                tracing::debug!("Sort {} {}", active.as_str(), direction.as_str())
            }
            None => tracing::debug!("Sort cleared"),
        }
    }

    pub(crate) fn toggle_timestamp_mode(&mut self) {
        self.model.ui.timestamp_mode =
            filedeck::logic::ui::toggle_timestamp_mode(self.model.ui.timestamp_mode);
    }
}
