use super::icons::IconRenderer;
use filedeck::model::{BreadcrumbSegment, BreadcrumbTrail};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " / ";

/// Build the trail spans and the column of the ellipsis, if any
fn build_breadcrumb_spans(
    trail: &BreadcrumbTrail,
    icon_renderer: &IconRenderer,
    menu_open: bool,
) -> (Vec<Span<'static>>, Option<u16>) {
    let mut spans = Vec::new();
    let mut ellipsis_col = None;
    let mut width = 0usize;

    for (idx, segment) in trail.segments().into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            width += SEPARATOR.width();
        }

        let span = match segment {
            BreadcrumbSegment::Home => {
                let icon = icon_renderer.home_icon();
                width += icon.content.width();
                spans.push(icon);
                Span::styled("Home", Style::default().fg(Color::Cyan))
            }
            BreadcrumbSegment::Ellipsis => {
                ellipsis_col = Some(width.min(u16::MAX as usize) as u16);
                let style = if menu_open {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Span::styled("…", style)
            }
            BreadcrumbSegment::Link(name) => {
                Span::styled(name.to_string(), Style::default().fg(Color::Cyan))
            }
            BreadcrumbSegment::Page(name) => Span::styled(
                name.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        width += span.content.width();
        spans.push(span);
    }

    (spans, ellipsis_col)
}

/// Render the breadcrumb trail
///
/// Returns the screen position of the ellipsis so its dropdown can be
/// anchored there.
pub fn render_breadcrumb(
    f: &mut Frame,
    area: Rect,
    trail: &BreadcrumbTrail,
    icon_renderer: &IconRenderer,
    menu_open: bool,
) -> Option<(u16, u16)> {
    let (spans, ellipsis_col) = build_breadcrumb_spans(trail, icon_renderer, menu_open);

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(paragraph, area);

    // Inside the left border, on the text line
    ellipsis_col.map(|col| (area.x + 1 + col, area.y + 1))
}
