//! Sorting comparison logic
//!
//! Pure functions for comparing file rows and cycling the sort state.

use crate::data::FileEntry;
use crate::{ColumnId, SortDirection};
use std::cmp::Ordering;

/// Active sort: column and direction
pub type SortState = Option<(ColumnId, SortDirection)>;

/// Row comparator used by sortable columns
pub type RowComparator = fn(&FileEntry, &FileEntry) -> Ordering;

/// Compare two strings in natural order
///
/// Runs of ASCII digits compare numerically, everything else compares
/// case-insensitively. Text sorts before digit runs. Names that differ only
/// in case or leading zeros compare equal.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use filedeck::logic::sorting::natural_cmp;
///
/// assert_eq!(natural_cmp("file2", "file10"), Ordering::Less);
/// assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(natural_cmp("plan", "2024 plan"), Ordering::Less);
/// assert_eq!(natural_cmp("File2", "file2"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_chunks = split_chunks(a);
    let b_chunks = split_chunks(b);

    for (x, y) in a_chunks.iter().zip(b_chunks.iter()) {
        let x_digits = x.starts_with(|c: char| c.is_ascii_digit());
        let y_digits = y.starts_with(|c: char| c.is_ascii_digit());

        let ord = match (x_digits, y_digits) {
            (true, true) => compare_digit_runs(x, y),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => x.to_lowercase().cmp(&y.to_lowercase()),
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_chunks.len().cmp(&b_chunks.len())
}

/// Split into alternating digit / non-digit runs
fn split_chunks(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (idx, ch) in s.char_indices() {
        let is_digit = ch.is_ascii_digit();
        if let Some(prev) = in_digits {
            if prev != is_digit {
                chunks.push(&s[start..idx]);
                start = idx;
            }
        }
        in_digits = Some(is_digit);
    }

    if start < s.len() {
        chunks.push(&s[start..]);
    }
    chunks
}

fn compare_digit_runs(x: &str, y: &str) -> Ordering {
    let x_trimmed = x.trim_start_matches('0');
    let y_trimmed = y.trim_start_matches('0');

    x_trimmed
        .len()
        .cmp(&y_trimmed.len())
        .then_with(|| x_trimmed.cmp(y_trimmed))
}

/// Compare rows by file name (natural order)
pub fn compare_by_name(a: &FileEntry, b: &FileEntry) -> Ordering {
    natural_cmp(&a.name, &b.name)
}

/// Compare rows by last-modified timestamp (oldest first)
pub fn compare_by_last_modified(a: &FileEntry, b: &FileEntry) -> Ordering {
    a.last_modified_on.cmp(&b.last_modified_on)
}

/// Next sort state after toggling a column
///
/// The toggled column cycles Ascending → Descending → unsorted. Toggling a
/// column that is not the active one starts it at Ascending and drops the
/// previous column's sort.
///
/// # Examples
/// ```
/// use filedeck::{ColumnId, SortDirection};
/// use filedeck::logic::sorting::next_sort_state;
///
/// let name = ColumnId::FileName;
/// let s1 = next_sort_state(None, name);
/// assert_eq!(s1, Some((name, SortDirection::Ascending)));
/// let s2 = next_sort_state(s1, name);
/// assert_eq!(s2, Some((name, SortDirection::Descending)));
/// assert_eq!(next_sort_state(s2, name), None);
/// ```
pub fn next_sort_state(current: SortState, column: ColumnId) -> SortState {
    match current {
        Some((active, SortDirection::Ascending)) if active == column => {
            Some((column, SortDirection::Descending))
        }
        Some((active, SortDirection::Descending)) if active == column => None,
        _ => Some((column, SortDirection::Ascending)),
    }
}

/// Sort row indices in place
///
/// Ties fall back to insertion order in both directions, so the
/// descending order is the exact reverse of ascending only when no two rows
/// compare equal.
pub fn sort_indices(
    rows: &[FileEntry],
    indices: &mut [usize],
    comparator: RowComparator,
    direction: SortDirection,
) {
    indices.sort_by(|&a, &b| {
        let ord = comparator(&rows[a], &rows[b]);
        let ord = match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        };
        ord.then(a.cmp(&b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_file(name: &str, day: u32) -> FileEntry {
        FileEntry::new(
            name,
            name,
            Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(natural_cmp("invoice-2", "invoice-10"), Ordering::Less);
        assert_eq!(natural_cmp("invoice-10", "invoice-9"), Ordering::Greater);
        // Same value
        assert_eq!(natural_cmp("a007", "a7"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_case_insensitive() {
        assert_eq!(natural_cmp("archive.zip", "Budget.xlsx"), Ordering::Less);
        assert_eq!(natural_cmp("Budget.xlsx", "archive.zip"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_text_before_digits() {
        assert_eq!(natural_cmp("plan", "2024 plan"), Ordering::Less);
        assert_eq!(natural_cmp("2024 plan", "plan"), Ordering::Greater);
        assert_eq!(natural_cmp("a", "1"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_case_only_difference_is_equal() {
        assert_eq!(natural_cmp("File2", "file2"), Ordering::Equal);
        assert_eq!(natural_cmp("README.md", "readme.MD"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_prefix_shorter_first() {
        assert_eq!(natural_cmp("Notes", "Notes.txt"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_unicode() {
        assert_eq!(natural_cmp("ébauche1", "ébauche2"), Ordering::Less);
    }

    #[test]
    fn test_next_sort_state_switching_column_resets() {
        let state = Some((ColumnId::FileName, SortDirection::Descending));
        assert_eq!(
            next_sort_state(state, ColumnId::LastModifiedOn),
            Some((ColumnId::LastModifiedOn, SortDirection::Ascending))
        );
    }

    #[test]
    fn test_next_sort_state_three_toggles_unsorted() {
        let mut state = None;
        for _ in 0..3 {
            state = next_sort_state(state, ColumnId::LastModifiedOn);
        }
        assert_eq!(state, None);
    }

    #[test]
    fn test_sort_indices_by_name() {
        let rows = vec![make_file("b", 1), make_file("file10", 2), make_file("file2", 3)];
        let mut indices = vec![0, 1, 2];
        sort_indices(&rows, &mut indices, compare_by_name, SortDirection::Ascending);
        assert_eq!(indices, vec![0, 2, 1]);
    }

    #[test]
    fn test_sort_indices_descending_reverses() {
        let rows = vec![make_file("x", 3), make_file("y", 1), make_file("z", 2)];
        let mut asc = vec![0, 1, 2];
        sort_indices(&rows, &mut asc, compare_by_last_modified, SortDirection::Ascending);
        let mut desc = vec![0, 1, 2];
        sort_indices(&rows, &mut desc, compare_by_last_modified, SortDirection::Descending);

        assert_eq!(asc, vec![1, 2, 0]);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_indices_case_ties_keep_insertion_order() {
        let rows = vec![make_file("file2", 1), make_file("File2", 2), make_file("a", 3)];
        let mut asc = vec![0, 1, 2];
        sort_indices(&rows, &mut asc, compare_by_name, SortDirection::Ascending);
        assert_eq!(asc, vec![2, 0, 1]);

        let mut desc = vec![0, 1, 2];
        sort_indices(&rows, &mut desc, compare_by_name, SortDirection::Descending);
        assert_eq!(desc, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_indices_ties_keep_insertion_order() {
        let rows = vec![make_file("a", 5), make_file("b", 5), make_file("c", 1)];
        let mut desc = vec![0, 1, 2];
        sort_indices(&rows, &mut desc, compare_by_last_modified, SortDirection::Descending);
        assert_eq!(desc, vec![0, 1, 2]);
    }
}
