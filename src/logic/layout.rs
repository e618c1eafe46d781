//! Layout calculation logic
//!
//! Pure functions for sizing the table viewport and placing popup menus.

/// Rows of the table body that fit in an area of the given height
///
/// The table block uses two border lines and one header line.
///
/// # Examples
/// ```
/// use filedeck::logic::layout::table_page_size;
///
/// assert_eq!(table_page_size(13), 10);
/// assert_eq!(table_page_size(2), 1);
/// ```
pub fn table_page_size(area_height: u16) -> usize {
    (area_height.saturating_sub(3) as usize).max(1)
}

/// Size of a menu popup: widest label plus borders and highlight symbol
pub fn menu_size(labels: &[&str], title_width: usize) -> (u16, u16) {
    let widest = labels
        .iter()
        .map(|l| unicode_width::UnicodeWidthStr::width(*l))
        .max()
        .unwrap_or(0)
        .max(title_width);
    let width = (widest + 4).min(u16::MAX as usize) as u16; // 2 borders + "► "
    let height = (labels.len() + 2).min(u16::MAX as usize) as u16;
    (width, height)
}

/// Top-left corner of a popup anchored at (`anchor_x`, `anchor_y`)
///
/// The popup opens below the anchor when it fits, otherwise above it, and
/// is shifted left so it stays inside the screen.
///
/// # Examples
/// ```
/// use filedeck::logic::layout::popup_origin;
///
/// // Fits below the anchor
/// assert_eq!(popup_origin((10, 5), (20, 6), (80, 24)), (10, 6));
/// // Too close to the bottom: opens above
/// assert_eq!(popup_origin((10, 20), (20, 6), (80, 24)), (10, 14));
/// // Too close to the right edge: shifted left
/// assert_eq!(popup_origin((70, 5), (20, 6), (80, 24)), (60, 6));
/// ```
pub fn popup_origin(anchor: (u16, u16), size: (u16, u16), screen: (u16, u16)) -> (u16, u16) {
    let (anchor_x, anchor_y) = anchor;
    let (width, height) = size;
    let (screen_w, screen_h) = screen;

    let x = anchor_x.min(screen_w.saturating_sub(width));
    let below = anchor_y.saturating_add(1);
    let y = if below.saturating_add(height) <= screen_h {
        below
    } else {
        anchor_y.saturating_sub(height)
    };
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_page_size_small_areas() {
        assert_eq!(table_page_size(0), 1);
        assert_eq!(table_page_size(3), 1);
        assert_eq!(table_page_size(4), 1);
        assert_eq!(table_page_size(5), 2);
    }

    #[test]
    fn test_menu_size() {
        assert_eq!(menu_size(&["File Information", "Delete"], 0), (20, 4));
        assert_eq!(menu_size(&["a"], 10), (14, 3));
        assert_eq!(menu_size(&[], 0), (4, 2));
    }

    #[test]
    fn test_popup_origin_tiny_screen() {
        // Larger than the screen: pinned to the top-left
        assert_eq!(popup_origin((5, 5), (40, 30), (20, 10)), (0, 0));
    }
}
