//! Table Model
//!
//! Owned state of the file table: the seed rows, row selection, sort and
//! filter. All mutation goes through the methods below; the visible row
//! list is recomputed after each one so readers never see stale order.
//!
//! Visible rows are always `filter(rows, filter_text)` ordered by the active
//! sort, or by insertion order when unsorted. Selections hidden by the
//! filter are kept but never counted, toggled by select-all, or added.

use std::collections::HashSet;

use super::columns::{file_columns, ColumnDescriptor};
use crate::data::FileEntry;
use crate::logic::selection::{self, CheckState};
use crate::logic::sorting::{self, SortState};
use crate::logic::{filter, navigation};
use crate::{ColumnId, SortDirection};

/// Text of the placeholder row shown when nothing is visible
pub const NO_RESULTS: &str = "No results.";

/// What the table body shows
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    Rows(Vec<&'a FileEntry>),
    /// Single placeholder row spanning `colspan` columns
    Empty {
        message: &'static str,
        colspan: usize,
    },
}

#[derive(Debug, Clone)]
pub struct TableState {
    rows: Vec<FileEntry>,
    columns: Vec<ColumnDescriptor>,
    selected_row_ids: HashSet<String>,
    sort: SortState,
    filter_text: String,
    /// Indices into `rows`, in display order
    visible: Vec<usize>,
    /// Index into `visible`
    cursor: Option<usize>,
}

impl TableState {
    /// Mount the table over a seed list with the standard file columns
    pub fn new(rows: Vec<FileEntry>) -> Self {
        Self::with_columns(rows, file_columns())
    }

    pub fn with_columns(rows: Vec<FileEntry>, columns: Vec<ColumnDescriptor>) -> Self {
        let mut table = Self {
            rows,
            columns,
            selected_row_ids: HashSet::new(),
            sort: None,
            filter_text: String::new(),
            visible: Vec::new(),
            cursor: None,
        };
        table.recompute();
        table
    }

    // ============================================
    // ACCESSORS
    // ============================================

    pub fn rows(&self) -> &[FileEntry] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// (id, title) of every sortable column, in display order
    pub fn sortable_columns(&self) -> Vec<(ColumnId, &'static str)> {
        self.columns
            .iter()
            .filter(|c| c.is_sortable())
            .map(|c| (c.id, c.title))
            .collect()
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Sort direction of a column, if it is the active sort column
    pub fn sort_direction_of(&self, column: ColumnId) -> Option<SortDirection> {
        match self.sort {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }

    pub fn selected_row_ids(&self) -> &HashSet<String> {
        &self.selected_row_ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_row_ids.contains(id)
    }

    // ============================================
    // OPERATIONS
    // ============================================

    /// Replace the file-name filter and recompute visible rows
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.recompute();
    }

    /// Cycle a column through Ascending → Descending → unsorted
    ///
    /// Any other column's sort is cleared. Columns without a comparator are
    /// ignored.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !self.is_sortable(column) {
            return;
        }
        self.sort = sorting::next_sort_state(self.sort, column);
        self.recompute();
    }

    /// Sort a column in an explicit direction (header menu Asc/Desc)
    pub fn set_sort(&mut self, column: ColumnId, direction: SortDirection) {
        if !self.is_sortable(column) {
            return;
        }
        self.sort = Some((column, direction));
        self.recompute();
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.recompute();
    }

    /// Set one row's selection
    ///
    /// Selecting only applies to visible rows; deselecting always applies.
    pub fn toggle_row_selected(&mut self, id: &str, value: bool) {
        if value {
            if self.is_visible(id) {
                self.selected_row_ids.insert(id.to_string());
            }
        } else {
            self.selected_row_ids.remove(id);
        }
    }

    /// Select or clear every visible row; hidden rows are untouched
    pub fn toggle_all_visible_selected(&mut self, value: bool) {
        for &idx in &self.visible {
            let id = &self.rows[idx].id;
            if value {
                self.selected_row_ids.insert(id.clone());
            } else {
                self.selected_row_ids.remove(id);
            }
        }
    }

    // ============================================
    // DERIVED
    // ============================================

    pub fn visible_rows(&self) -> Vec<&FileEntry> {
        self.visible.iter().map(|&idx| &self.rows[idx]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    /// Selected rows among the visible ones
    pub fn selected_visible_count(&self) -> usize {
        selection::count_selected(self.visible_ids(), &self.selected_row_ids)
    }

    /// Select-all checkbox state for the visible rows
    pub fn header_check_state(&self) -> CheckState {
        selection::header_check_state(self.visible_ids(), &self.selected_row_ids)
    }

    /// "N of M row(s) selected." over the visible rows
    pub fn status_line(&self) -> String {
        selection::format_selection_status(self.selected_visible_count(), self.visible_count())
    }

    pub fn body(&self) -> TableBody<'_> {
        if self.visible.is_empty() {
            TableBody::Empty {
                message: NO_RESULTS,
                colspan: self.columns.len(),
            }
        } else {
            TableBody::Rows(self.visible_rows())
        }
    }

    // ============================================
    // CURSOR
    // ============================================

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn cursor_row(&self) -> Option<&FileEntry> {
        self.cursor
            .and_then(|pos| self.visible.get(pos))
            .map(|&idx| &self.rows[idx])
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = navigation::move_cursor(self.cursor, delta, self.visible.len());
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = navigation::clamp_cursor(Some(0), self.visible.len());
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = navigation::clamp_cursor(Some(usize::MAX), self.visible.len());
    }

    // ============================================
    // INTERNALS
    // ============================================

    fn is_sortable(&self, column: ColumnId) -> bool {
        self.column(column).is_some_and(|c| c.is_sortable())
    }

    fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|&idx| self.rows[idx].id == id)
    }

    fn visible_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.visible.iter().map(|&idx| self.rows[idx].id.as_str())
    }

    /// Rebuild the visible list, keeping the cursor on the same row if it
    /// is still visible
    fn recompute(&mut self) {
        let cursor_id = self.cursor_row().map(|row| row.id.clone());

        let mut visible = filter::filter_rows(&self.rows, &self.filter_text);
        if let Some((column, direction)) = self.sort {
            if let Some(comparator) = self.column(column).and_then(|c| c.comparator()) {
                sorting::sort_indices(&self.rows, &mut visible, comparator, direction);
            }
        }
        self.visible = visible;

        let restored = cursor_id.and_then(|id| {
            self.visible
                .iter()
                .position(|&idx| self.rows[idx].id == id)
        });
        self.cursor = restored.or_else(|| navigation::clamp_cursor(self.cursor, self.visible.len()));
    }
}
