//! Row selection logic
//!
//! Pure functions for the select column: header checkbox state and the
//! visible-only counts shown in the status line.

use std::collections::HashSet;

/// Tri-state of a checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    pub fn symbol(&self) -> &str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
            CheckState::Checked => "[x]",
        }
    }

    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Number of visible ids that are selected
pub fn count_selected<'a>(
    visible_ids: impl IntoIterator<Item = &'a str>,
    selected: &HashSet<String>,
) -> usize {
    visible_ids
        .into_iter()
        .filter(|id| selected.contains(*id))
        .count()
}

/// Header checkbox state for the visible rows
///
/// Hidden selections never count: with no visible rows the header is
/// unchecked even if the selection set is non-empty.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use filedeck::logic::selection::{header_check_state, CheckState};
///
/// let selected: HashSet<String> = ["a".to_string()].into_iter().collect();
/// assert_eq!(header_check_state(["a", "b"], &selected), CheckState::Indeterminate);
/// assert_eq!(header_check_state(["a"], &selected), CheckState::Checked);
/// assert_eq!(header_check_state(["b"], &selected), CheckState::Unchecked);
/// ```
pub fn header_check_state<'a>(
    visible_ids: impl IntoIterator<Item = &'a str>,
    selected: &HashSet<String>,
) -> CheckState {
    let mut total = 0;
    let mut checked = 0;
    for id in visible_ids {
        total += 1;
        if selected.contains(id) {
            checked += 1;
        }
    }

    if total == 0 || checked == 0 {
        CheckState::Unchecked
    } else if checked == total {
        CheckState::Checked
    } else {
        CheckState::Indeterminate
    }
}

/// Status line text: "N of M row(s) selected."
pub fn format_selection_status(selected: usize, visible: usize) -> String {
    format!("{} of {} row(s) selected.", selected, visible)
}
