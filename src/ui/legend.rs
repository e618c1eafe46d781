use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    filter_mode: bool,
    has_filter: bool,
    menu_open: bool,
) -> Vec<Span<'static>> {
    // Menus and the filter input own the keyboard while open
    if menu_open {
        return vec![
            key("↑/↓"),
            Span::raw(":Move  "),
            key("Enter"),
            Span::raw(":Choose  "),
            key("Esc"),
            Span::raw(":Close"),
        ];
    }
    if filter_mode {
        return vec![
            key("Enter"),
            Span::raw(":Keep Filter  "),
            key("Esc"),
            Span::raw(":Clear Filter"),
        ];
    }

    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![
            key("j/k"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![key("↑/↓"), Span::raw(":Nav  ")]);
    }

    hotkey_spans.extend(vec![
        key("Space"),
        Span::raw(":Select  "),
        key("a"),
        Span::raw(":Select All  "),
    ]);

    if has_filter {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Filter  ")]);
    } else {
        hotkey_spans.extend(vec![key("/"), Span::raw(":Filter  ")]);
    }

    hotkey_spans.extend(vec![
        key("1/2"),
        Span::raw(":Sort Name/Modified  "),
        key("s"),
        Span::raw(":Sort Menu  "),
        key("t"),
        Span::raw(":Time Format  "),
        key("Enter"),
        Span::raw(":Actions  "),
        key("."),
        Span::raw(":Actions Dropdown  "),
        key("n"),
        Span::raw(":Add New  "),
        key("b"),
        Span::raw(":Folders  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    filter_mode: bool,
    has_filter: bool,
    menu_open: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, filter_mode, has_filter, menu_open));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    filter_mode: bool,
    has_filter: bool,
    menu_open: bool,
) {
    let legend = build_legend_paragraph(vim_mode, filter_mode, has_filter, menu_open);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    filter_mode: bool,
    has_filter: bool,
    menu_open: bool,
) -> u16 {
    // Count lines without the block: line_count() does not subtract borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, filter_mode, has_filter, menu_open));
    let paragraph_for_counting = Paragraph::new(vec![hotkey_line]).wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count.min(u16::MAX as usize) as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_lists_table_actions() {
        let text = spans_to_text(&build_hotkey_spans(false, false, false, false));
        assert!(text.contains("↑/↓:Nav"));
        assert!(text.contains("Space:Select"));
        assert!(text.contains("/:Filter"));
        assert!(text.contains("n:Add New"));
        assert!(text.ends_with("q:Quit"));
    }

    #[test]
    fn test_legend_vim_mode() {
        let text = spans_to_text(&build_hotkey_spans(true, false, false, false));
        assert!(text.contains("j/k:Nav"));
        assert!(text.contains("gg/G:First/Last"));
    }

    #[test]
    fn test_legend_offers_clear_when_filtered() {
        let text = spans_to_text(&build_hotkey_spans(false, false, true, false));
        assert!(text.contains("Esc:Clear Filter"));
        assert!(!text.contains("/:Filter"));
    }

    #[test]
    fn test_legend_in_menu_and_filter_input() {
        let menu = spans_to_text(&build_hotkey_spans(false, false, false, true));
        assert_eq!(menu, "↑/↓:Move  Enter:Choose  Esc:Close");

        let filter = spans_to_text(&build_hotkey_spans(false, true, false, false));
        assert_eq!(filter, "Enter:Keep Filter  Esc:Clear Filter");
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, false, false, false, false);
        let narrow = calculate_legend_height(40, false, false, false, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
