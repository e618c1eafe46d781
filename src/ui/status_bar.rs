use filedeck::model::TableState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the status text: selection count, then sort and filter details
fn build_status_spans(table: &TableState) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        table.status_line(),
        Style::default().fg(Color::White),
    )];

    let sort_text = match table.sort() {
        Some((column, direction)) => {
            let title = table.column(column).map(|c| c.title).unwrap_or("");
            format!("Sort: {} {}", title, direction.arrow())
        }
        None => "Sort: none".to_string(),
    };
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::raw(sort_text));

    if !table.filter_text().is_empty() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("Filter: \"{}\"", table.filter_text())));
    }

    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::raw(format!(
        "Showing {} of {}",
        table.visible_count(),
        table.total_count()
    )));

    spans
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, table: &TableState) {
    let paragraph = Paragraph::new(Line::from(build_status_spans(table)))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}
