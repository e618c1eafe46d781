//! Cursor navigation logic
//!
//! Pure functions for moving the table cursor and the highlighted menu item.

use super::menu::MenuEntry;

/// Move the table cursor by `delta` rows, clamped to the list
///
/// The table does not wrap: moving past either end stops at the first or
/// last row. With no cursor, any move lands on the first row.
///
/// # Examples
/// ```
/// use filedeck::logic::navigation::move_cursor;
///
/// assert_eq!(move_cursor(None, 1, 3), Some(0));
/// assert_eq!(move_cursor(Some(1), 1, 3), Some(2));
/// assert_eq!(move_cursor(Some(2), 1, 3), Some(2));
/// assert_eq!(move_cursor(Some(0), -5, 3), Some(0));
/// assert_eq!(move_cursor(Some(0), 1, 0), None);
/// ```
pub fn move_cursor(current: Option<usize>, delta: isize, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    let Some(current) = current else {
        return Some(0);
    };

    let last = list_len - 1;
    let current = current.min(last);
    let target = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize).min(last)
    };
    Some(target)
}

/// Keep a cursor inside a list that may have shrunk
pub fn clamp_cursor(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// Index of the first selectable (non-separator) menu entry
pub fn first_menu_item(entries: &[MenuEntry]) -> Option<usize> {
    entries.iter().position(|e| e.action().is_some())
}

/// Step to the next or previous selectable menu entry, wrapping around
///
/// Separators are skipped. Returns `None` only when the menu has no
/// selectable entries.
pub fn step_menu_item(entries: &[MenuEntry], current: usize, forward: bool) -> Option<usize> {
    let len = entries.len();
    if len == 0 {
        return None;
    }

    let mut idx = current.min(len - 1);
    for _ in 0..len {
        idx = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        if entries[idx].action().is_some() {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::menu::row_action_menu;

    #[test]
    fn test_move_cursor_page_jumps() {
        assert_eq!(move_cursor(Some(2), 10, 8), Some(7));
        assert_eq!(move_cursor(Some(7), -3, 8), Some(4));
    }

    #[test]
    fn test_move_cursor_out_of_bounds_current() {
        // A stale cursor past the end is pulled back first
        assert_eq!(move_cursor(Some(10), -1, 3), Some(1));
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(Some(5), 3), Some(2));
        assert_eq!(clamp_cursor(Some(1), 3), Some(1));
        assert_eq!(clamp_cursor(None, 3), Some(0));
        assert_eq!(clamp_cursor(Some(1), 0), None);
    }

    #[test]
    fn test_first_menu_item() {
        assert_eq!(first_menu_item(&row_action_menu()), Some(0));
        assert_eq!(first_menu_item(&[MenuEntry::Separator]), None);
        assert_eq!(first_menu_item(&[]), None);
    }

    #[test]
    fn test_step_menu_skips_separators() {
        let menu = row_action_menu();
        // 0 File Information, 1 ---, 2 Download
        assert_eq!(step_menu_item(&menu, 0, true), Some(2));
        assert_eq!(step_menu_item(&menu, 2, false), Some(0));
        // 7 Paste, 8 ---, 9 Delete
        assert_eq!(step_menu_item(&menu, 7, true), Some(9));
    }

    #[test]
    fn test_step_menu_wraps() {
        let menu = row_action_menu();
        assert_eq!(step_menu_item(&menu, 9, true), Some(0));
        assert_eq!(step_menu_item(&menu, 0, false), Some(9));
    }

    #[test]
    fn test_step_menu_without_items() {
        assert_eq!(step_menu_item(&[MenuEntry::Separator], 0, true), None);
        assert_eq!(step_menu_item(&[], 0, true), None);
    }
}
