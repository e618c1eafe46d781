//! File operations seam
//!
//! Menu actions are dispatched through `FileOperations`. No backend exists
//! yet; `UnwiredOperations` answers every request with a notice that the
//! action is not available, which the UI shows as a toast.

use crate::data::FileEntry;
use crate::logic::menu::{AddNewAction, RowAction};

pub trait FileOperations {
    /// Run a row action on one entry, returning a user-facing notice
    fn row_action(&mut self, action: RowAction, entry: &FileEntry) -> String;

    /// Run an "Add New" action in the given folder
    fn add_new(&mut self, action: AddNewAction, folder_path: &[String]) -> String;
}

#[derive(Debug, Default)]
pub struct UnwiredOperations;

impl FileOperations for UnwiredOperations {
    fn row_action(&mut self, action: RowAction, entry: &FileEntry) -> String {
        tracing::debug!("Unwired row action {:?} on '{}'", action, entry.name);
        format!("{}: not available for '{}'", action.label(), entry.name)
    }

    fn add_new(&mut self, action: AddNewAction, folder_path: &[String]) -> String {
        tracing::debug!("Unwired add-new action {:?} in {:?}", action, folder_path);
        format!("{}: not available", action.label())
    }
}
