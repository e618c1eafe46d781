use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb trail (top)
    pub breadcrumb_area: Rect,
    /// Filter input on the left of the toolbar
    pub filter_area: Rect,
    /// "Add New" button on the right of the toolbar
    pub add_new_area: Rect,
    /// File table
    pub table_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Width of the "Add New" toolbar button
const ADD_NEW_WIDTH: u16 = 17;

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Breadcrumb trail
            Constraint::Length(3),             // Toolbar (filter + Add New)
            Constraint::Min(4),                // Table (borders, header, one row)
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let toolbar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(ADD_NEW_WIDTH)])
        .split(main_chunks[1]);

    LayoutInfo {
        breadcrumb_area: main_chunks[0],
        filter_area: toolbar[0],
        add_new_area: toolbar[1],
        table_area: main_chunks[2],
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_full_width() {
        let info = calculate_layout(Rect::new(0, 0, 100, 40), 3);
        assert_eq!(info.breadcrumb_area, Rect::new(0, 0, 100, 3));
        assert_eq!(info.filter_area.y, 3);
        assert_eq!(info.add_new_area.width, ADD_NEW_WIDTH);
        assert_eq!(info.filter_area.width + info.add_new_area.width, 100);
        assert_eq!(info.table_area, Rect::new(0, 6, 100, 28));
        assert_eq!(info.legend_area.y, 34);
        assert_eq!(info.status_area, Rect::new(0, 37, 100, 3));
    }
}
