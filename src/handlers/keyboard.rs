//! Keyboard Input Handler
//!
//! Keys go to the first layer that owns them: an open menu, then the
//! filter input, then the table.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use filedeck::model::MenuAnchor;
use filedeck::ColumnId;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if app.model.ui.menu.is_some() {
        handle_menu_key(app, key);
        return Ok(());
    }

    if app.model.ui.filter_mode {
        handle_filter_key(app, key);
        return Ok(());
    }

    handle_table_key(app, key);
    Ok(())
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Up => app.menu_prev(),
        KeyCode::Down => app.menu_next(),
        KeyCode::Char('k') if vim => app.menu_prev(),
        KeyCode::Char('j') if vim => app.menu_next(),
        KeyCode::Enter => app.activate_menu_item(),
        KeyCode::Esc => app.close_menu(),
        KeyCode::Char('q') => app.close_menu(),
        _ => {
            // Ignore other keys while a menu is open
        }
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_filter(),
        KeyCode::Enter => app.accept_filter(),
        KeyCode::Backspace => app.filter_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter_push_char(c)
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Any key other than a first 'g' breaks the 'gg' sequence
    let was_g = app.last_key_was_g;
    app.last_key_was_g = false;

    match key.code {
        KeyCode::Char('f') if ctrl => app.begin_filter_input(),

        // Vim keybindings with Ctrl modifiers (check before plain letters)
        KeyCode::Char('d') if vim && ctrl => app.half_page_down(),
        KeyCode::Char('u') if vim && ctrl => app.half_page_up(),
        KeyCode::Char('b') if vim && ctrl => app.page_up(),
        // Other Ctrl chords never fall through to the plain letters
        KeyCode::Char(_) if ctrl => {}

        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('/') => app.begin_filter_input(),
        KeyCode::Esc => {
            // Esc on the table clears a kept filter
            if !app.model.table.filter_text().is_empty() {
                app.cancel_filter();
            }
        }

        // Selection
        KeyCode::Char(' ') => app.toggle_cursor_row(),
        KeyCode::Char('a') => app.toggle_all_visible(),

        // Sorting
        KeyCode::Char('1') => app.cycle_sort(ColumnId::FileName),
        KeyCode::Char('2') => app.cycle_sort(ColumnId::LastModifiedOn),
        KeyCode::Char('s') => app.open_sort_menu(),
        KeyCode::Char('t') => app.toggle_timestamp_mode(),

        // Menus
        KeyCode::Enter => app.open_row_menu(MenuAnchor::Context),
        KeyCode::Char('.') => app.open_row_menu(MenuAnchor::Dropdown),
        KeyCode::Char('n') => app.open_add_new_menu(),
        KeyCode::Char('b') => app.open_breadcrumb_menu(),

        // Vim keybindings
        KeyCode::Char('j') if vim => app.next_row(),
        KeyCode::Char('k') if vim => app.previous_row(),
        KeyCode::Char('g') if vim => {
            if was_g {
                // gg - jump to first
                app.jump_to_first();
            } else {
                app.last_key_was_g = true;
            }
        }
        KeyCode::Char('G') if vim => app.jump_to_last(),

        // Standard navigation keys
        KeyCode::Up => app.previous_row(),
        KeyCode::Down => app.next_row(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icons::{IconMode, IconRenderer, IconTheme};
    use chrono::{TimeZone, Utc};
    use filedeck::data::{FileEntry, FileListing, StaticListing};
    use filedeck::logic::menu::{AddNewAction, RowAction};
    use filedeck::logic::selection::CheckState;
    use filedeck::model::{MenuKind, Model};
    use filedeck::ops::FileOperations;
    use filedeck::{SortDirection, TimestampMode};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Remembers every dispatched action
    struct RecordingOperations {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FileOperations for RecordingOperations {
        fn row_action(&mut self, action: RowAction, entry: &FileEntry) -> String {
            let call = format!("{} {}", action.label(), entry.name);
            self.calls.borrow_mut().push(call.clone());
            call
        }

        fn add_new(&mut self, action: AddNewAction, folder_path: &[String]) -> String {
            let call = format!("{} in {}", action.label(), folder_path.join("/"));
            self.calls.borrow_mut().push(call.clone());
            call
        }
    }

    fn folder_path() -> Vec<String> {
        (1..=5).map(|n| format!("Folder {}", n)).collect()
    }

    fn create_test_app(vim_mode: bool) -> (App, Rc<RefCell<Vec<String>>>) {
        let listing = StaticListing::new(vec![
            FileEntry::new("1", "Budget.xlsx", Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
            FileEntry::new("2", "Notes.txt", Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap()),
            FileEntry::new("3", "Roadmap.pptx", Utc.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap()),
        ]);
        let path = folder_path();
        let rows = listing.list(&path).unwrap();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let app = App {
            model: Model::new(rows, &path, vim_mode, TimestampMode::Relative),
            operations: Box::new(RecordingOperations {
                calls: Rc::clone(&calls),
            }),
            icon_renderer: IconRenderer::new(IconMode::Emoji, IconTheme::default()),
            page_size: 10,
            last_key_was_g: false,
        };
        (app, calls)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn cursor_name(app: &App) -> Option<&str> {
        app.model.table.cursor_row().map(|row| row.name.as_str())
    }

    #[test]
    fn test_filter_enter_keeps_text() {
        let (mut app, _) = create_test_app(false);

        press(&mut app, KeyCode::Char('/'));
        assert!(app.model.ui.filter_mode);

        // Letters go to the input, not the table bindings
        type_text(&mut app, "bud");
        assert_eq!(app.model.table.filter_text(), "bud");
        assert_eq!(app.model.table.visible_count(), 1);
        assert!(app.model.table.selected_row_ids().is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(!app.model.ui.filter_mode);
        assert_eq!(app.model.table.filter_text(), "bud");
        assert!(app.model.ui.menu.is_none());
    }

    #[test]
    fn test_filter_esc_clears_text() {
        let (mut app, _) = create_test_app(false);

        press_ctrl(&mut app, 'f');
        type_text(&mut app, "notes");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.model.table.filter_text(), "note");

        press(&mut app, KeyCode::Esc);
        assert!(!app.model.ui.filter_mode);
        assert_eq!(app.model.table.filter_text(), "");
        assert_eq!(app.model.table.visible_count(), 3);
    }

    #[test]
    fn test_esc_on_table_clears_kept_filter() {
        let (mut app, _) = create_test_app(false);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "road");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.table.visible_count(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.model.table.filter_text(), "");
        assert_eq!(app.model.table.visible_count(), 3);
        assert!(!app.model.ui.should_quit);
    }

    #[test]
    fn test_select_all_key_toggles_against_header_state() {
        let (mut app, _) = create_test_app(false);

        // Partial selection: 'a' selects the rest
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.model.table.header_check_state(), CheckState::Indeterminate);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.model.table.selected_visible_count(), 3);
        assert_eq!(app.model.table.header_check_state(), CheckState::Checked);

        // All checked: 'a' clears
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.model.table.selected_visible_count(), 0);
        assert_eq!(app.model.table.header_check_state(), CheckState::Unchecked);
    }

    #[test]
    fn test_vim_gg_jumps_to_first_row() {
        let (mut app, _) = create_test_app(true);

        press(&mut app, KeyCode::Char('G'));
        assert_eq!(cursor_name(&app), Some("Roadmap.pptx"));

        // A lone 'g' does nothing
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(cursor_name(&app), Some("Roadmap.pptx"));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(cursor_name(&app), Some("Budget.xlsx"));

        // Another key in between breaks the sequence
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(cursor_name(&app), Some("Budget.xlsx"));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(cursor_name(&app), Some("Roadmap.pptx"));
    }

    #[test]
    fn test_row_action_dispatches_and_shows_toast() {
        let (mut app, calls) = create_test_app(false);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.model.ui.menu.as_ref().map(|m| &m.kind),
            Some(MenuKind::RowActions { row_id, .. }) if row_id == "2"
        ));

        // File Information, then Download past the separator
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.model.ui.menu.is_none());
        assert_eq!(*calls.borrow(), vec!["Download Notes.txt".to_string()]);
        let toast = app.model.ui.toast_message.as_ref().map(|(text, _)| text.as_str());
        assert_eq!(toast, Some("Download Notes.txt"));
    }

    #[test]
    fn test_add_new_dispatches_with_folder_path() {
        let (mut app, calls) = create_test_app(false);

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            *calls.borrow(),
            vec!["New Folder in Folder 1/Folder 2/Folder 3/Folder 4/Folder 5".to_string()]
        );
        assert!(app.model.ui.toast_message.is_some());
    }

    #[test]
    fn test_breadcrumb_pick_only_closes_menu() {
        let (mut app, calls) = create_test_app(false);
        let trail_before = app.model.navigation.clone();

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(
            app.model.ui.menu.as_ref().map(|m| &m.kind),
            Some(&MenuKind::Breadcrumb)
        );

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.model.ui.menu.is_none());
        assert_eq!(app.model.navigation, trail_before);
        assert!(app.model.ui.toast_message.is_none());
        assert!(calls.borrow().is_empty());
        assert_eq!(app.model.table.visible_count(), 3);
    }

    #[test]
    fn test_open_menu_captures_keys() {
        let (mut app, calls) = create_test_app(false);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.model.has_modal());

        // Table bindings are inert while the menu is open
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('1'));
        assert!(app.model.table.selected_row_ids().is_empty());
        assert!(!app.model.ui.filter_mode);
        assert_eq!(app.model.table.sort(), None);
        assert_eq!(
            app.model.ui.menu.as_ref().map(|m| &m.kind),
            Some(&MenuKind::AddNew)
        );

        // 'q' closes the menu instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert!(app.model.ui.menu.is_none());
        assert!(!app.model.ui.should_quit);
        assert!(calls.borrow().is_empty());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_sort_menu_sets_direction() {
        let (mut app, _) = create_test_app(false);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.model.ui.menu.is_none());
        assert_eq!(
            app.model.table.sort_direction_of(filedeck::ColumnId::FileName),
            Some(SortDirection::Descending)
        );
        assert_eq!(cursor_name(&app), Some("Budget.xlsx"));
    }

    #[test]
    fn test_ctrl_letters_do_not_trigger_plain_bindings() {
        let (mut app, _) = create_test_app(false);

        press_ctrl(&mut app, 'b');
        press_ctrl(&mut app, 'n');
        press_ctrl(&mut app, 's');
        assert!(app.model.ui.menu.is_none());

        press_ctrl(&mut app, 'a');
        assert!(app.model.table.selected_row_ids().is_empty());

        press_ctrl(&mut app, 'q');
        assert!(!app.model.ui.should_quit);

        press_ctrl(&mut app, 'c');
        assert!(app.model.ui.should_quit);
    }
}
