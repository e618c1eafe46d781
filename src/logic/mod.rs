//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - filter: File-name filter matching
//! - formatting: Relative/absolute timestamps, text truncation
//! - layout: Table viewport and popup placement
//! - menu: Fixed menus and their entry order
//! - navigation: Table cursor and menu item stepping
//! - selection: Header checkbox state and selection counts
//! - sorting: Row comparators and the sort toggle cycle
//! - ui: UI timing and toggles

pub mod filter;
pub mod formatting;
pub mod layout;
pub mod menu;
pub mod navigation;
pub mod selection;
pub mod sorting;
pub mod ui;
