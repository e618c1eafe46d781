//! Filter input
//!
//! The filter box updates the table on every keystroke. Enter leaves the
//! input and keeps the text, Esc leaves it and clears the filter.

use crate::App;

impl App {
    pub(crate) fn begin_filter_input(&mut self) {
        self.model.ui.menu = None;
        self.model.ui.filter_mode = true;
    }

    pub(crate) fn filter_push_char(&mut self, c: char) {
        let mut text = self.model.table.filter_text().to_string();
        text.push(c);
        self.apply_filter(text);
    }

    pub(crate) fn filter_backspace(&mut self) {
        let mut text = self.model.table.filter_text().to_string();
        if text.pop().is_some() {
            self.apply_filter(text);
        }
    }

    pub(crate) fn accept_filter(&mut self) {
        self.model.ui.filter_mode = false;
    }

    pub(crate) fn cancel_filter(&mut self) {
        self.model.ui.filter_mode = false;
        self.apply_filter(String::new());
    }

    fn apply_filter(&mut self, text: String) {
        self.model.table.set_filter_text(text);
        tracing::debug!(
            "Filter '{}' shows {} of {} rows",
            self.model.table.filter_text(),
            self.model.table.visible_count(),
            self.model.table.total_count()
        );
    }
}
