//! Toolbar UI
//!
//! Renders the file-name filter input and the "Add New" button above the
//! table.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the filter input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `filter_text`: Current filter
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Rows matching the filter
pub fn render_filter_input(
    f: &mut Frame,
    area: Rect,
    filter_text: &str,
    active: bool,
    match_count: usize,
) {
    let title = if active {
        format!(" Filter ({} matches) - Enter to keep, Esc to clear ", match_count)
    } else if !filter_text.is_empty() {
        format!(" Filter ({} matches) - Esc to clear ", match_count)
    } else {
        " Filter (/) ".to_string()
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![Span::raw(filter_text), Span::styled("█", cursor_style)])
    } else if filter_text.is_empty() {
        Line::from(Span::styled(
            "Filter by filename...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(filter_text, Style::default().fg(Color::Gray)))
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the "Add New" button; highlighted while its menu is open
pub fn render_add_new_button(f: &mut Frame, area: Rect, menu_open: bool) {
    let style = if menu_open {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(Line::from(vec![
        Span::styled("+ Add New ", style),
        Span::styled("(n)", Style::default().fg(Color::Yellow)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(button, area);
}
