// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Calculates screen layout (breadcrumb, toolbar, table, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the folder trail
// - toolbar: Renders the filter input and the "Add New" button
// - file_table: Renders the file table with its placeholder row
// - menu: Renders popup menus anchored to the element that opened them
// - legend: Renders hotkey legend
// - status_bar: Renders selection count, sort and filter state
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod file_table;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod menu;
pub mod render;
pub mod status_bar;
pub mod toast;
pub mod toolbar;

// Re-export main render function for convenience
pub use render::render;
