//! Filter Logic
//!
//! Pure functions for filtering table rows by the file-name filter text.

use crate::data::FileEntry;

/// Match the filter text against a file name
///
/// # Rules
/// - Case-insensitive substring match
/// - Empty filter text matches everything
///
/// # Examples
/// ```
/// use filedeck::logic::filter::name_matches;
///
/// assert!(name_matches("bud", "Budget.xlsx"));
/// assert!(name_matches("", "anything"));
/// assert!(!name_matches("notes", "Budget.xlsx"));
/// ```
pub fn name_matches(filter_text: &str, name: &str) -> bool {
    if filter_text.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&filter_text.to_lowercase())
}

/// Indices of the rows whose name matches, in insertion order
pub fn filter_rows(rows: &[FileEntry], filter_text: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| name_matches(filter_text, &row.name))
        .map(|(idx, _)| idx)
        .collect()
}
