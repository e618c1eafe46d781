//! Menu definitions
//!
//! The fixed menus of the page: row actions (dropdown and context menu),
//! "Add New", the column header sort menu and the breadcrumb ellipsis.
//! Entry order and separators are part of the contract.

use crate::{ColumnId, SortDirection};

/// Per-row file actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    FileInformation,
    Download,
    Rename,
    Cut,
    Copy,
    Paste,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &str {
        match self {
            RowAction::FileInformation => "File Information",
            RowAction::Download => "Download",
            RowAction::Rename => "Rename",
            RowAction::Cut => "Cut",
            RowAction::Copy => "Copy",
            RowAction::Paste => "Paste",
            RowAction::Delete => "Delete",
        }
    }
}

/// Entries of the "Add New" toolbar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddNewAction {
    NewFolder,
    FileUpload,
    FolderUpload,
}

impl AddNewAction {
    pub fn label(&self) -> &str {
        match self {
            AddNewAction::NewFolder => "New Folder",
            AddNewAction::FileUpload => "File Upload",
            AddNewAction::FolderUpload => "Folder Upload",
        }
    }
}

/// What activating a menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Row(RowAction),
    AddNew(AddNewAction),
    Sort(ColumnId, SortDirection),
    ClearSort,
    /// Index into the collapsed breadcrumb folders (display only)
    Breadcrumb(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: String, action: MenuAction },
    Separator,
}

impl MenuEntry {
    fn item(label: impl Into<String>, action: MenuAction) -> Self {
        MenuEntry::Item {
            label: label.into(),
            action,
        }
    }

    pub fn action(&self) -> Option<MenuAction> {
        match self {
            MenuEntry::Item { action, .. } => Some(*action),
            MenuEntry::Separator => None,
        }
    }
}

const ROW_ACTION_GROUPS: &[&[RowAction]] = &[
    &[RowAction::FileInformation],
    &[RowAction::Download, RowAction::Rename],
    &[RowAction::Cut, RowAction::Copy, RowAction::Paste],
    &[RowAction::Delete],
];

const ADD_NEW_GROUPS: &[&[AddNewAction]] = &[
    &[AddNewAction::NewFolder],
    &[AddNewAction::FileUpload, AddNewAction::FolderUpload],
];

/// Row action menu, shared by the actions dropdown and the context menu
pub fn row_action_menu() -> Vec<MenuEntry> {
    grouped(ROW_ACTION_GROUPS, |action| {
        MenuEntry::item(action.label(), MenuAction::Row(*action))
    })
}

/// "Add New" toolbar menu
pub fn add_new_menu() -> Vec<MenuEntry> {
    grouped(ADD_NEW_GROUPS, |action| {
        MenuEntry::item(action.label(), MenuAction::AddNew(*action))
    })
}

/// Header sort menu: Asc/Desc for each sortable column, then a reset
pub fn sort_menu(columns: &[(ColumnId, &str)]) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    for (column, title) in columns {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            entries.push(MenuEntry::item(
                format!("{} {} {}", title, direction.arrow(), direction.as_str()),
                MenuAction::Sort(*column, direction),
            ));
        }
        entries.push(MenuEntry::Separator);
    }
    entries.push(MenuEntry::item("Clear sort", MenuAction::ClearSort));
    entries
}

/// Breadcrumb ellipsis dropdown listing the collapsed folders
pub fn breadcrumb_menu(collapsed: &[String]) -> Vec<MenuEntry> {
    collapsed
        .iter()
        .enumerate()
        .map(|(idx, name)| MenuEntry::item(name.clone(), MenuAction::Breadcrumb(idx)))
        .collect()
}

fn grouped<T>(groups: &[&[T]], to_entry: impl Fn(&T) -> MenuEntry) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            entries.push(MenuEntry::Separator);
        }
        entries.extend(group.iter().map(&to_entry));
    }
    entries
}
