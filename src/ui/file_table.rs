//! File Table UI
//!
//! Renders the table: select-all checkbox and sortable headers, one row per
//! visible entry, and the "No results." placeholder when nothing matches.

use super::icons::IconRenderer;
use filedeck::data::FileEntry;
use filedeck::logic::formatting::truncate_to_width;
use filedeck::logic::selection::CheckState;
use filedeck::model::{ColumnDescriptor, ColumnKind, RenderContext, TableBody, TableState};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table,
        TableState as ViewState,
    },
    Frame,
};

const HIGHLIGHT_SYMBOL: &str = "► ";
const ACTIONS_TRIGGER: &str = "⋯";
const COLUMN_SPACING: u16 = 1;

/// Screen positions popups attached to the table open from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAnchors {
    /// Header cell of the first sortable column
    pub header: (u16, u16),
    /// Name cell of the cursor row
    pub cursor_row: Option<(u16, u16)>,
    /// Actions cell of the cursor row
    pub cursor_actions: Option<(u16, u16)>,
}

fn column_constraints(columns: &[ColumnDescriptor]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|c| Constraint::Ratio(c.basis.0, c.basis.1))
        .collect()
}

/// Split the row area the same way the table widget does
fn column_rects(columns: &[ColumnDescriptor], inner: Rect) -> Vec<Rect> {
    let symbol_width = HIGHLIGHT_SYMBOL.chars().count() as u16;
    let rows_area = Rect {
        x: inner.x + symbol_width.min(inner.width),
        width: inner.width.saturating_sub(symbol_width),
        ..inner
    };
    Layout::horizontal(column_constraints(columns))
        .spacing(COLUMN_SPACING)
        .split(rows_area)
        .to_vec()
}

fn header_label(table: &TableState, column: &ColumnDescriptor) -> Line<'static> {
    match column.kind {
        ColumnKind::Select => Line::from(table.header_check_state().symbol().to_string()),
        ColumnKind::Action => Line::from(""),
        ColumnKind::Text { .. } => {
            let mut spans = vec![Span::raw(column.title)];
            if let Some(direction) = table.sort_direction_of(column.id) {
                spans.push(Span::styled(
                    format!(" {}", direction.arrow()),
                    Style::default().fg(Color::Yellow),
                ));
            } else if column.is_sortable() {
                spans.push(Span::styled(" ↕", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        }
    }
}

fn build_header(table: &TableState) -> Row<'static> {
    let cells: Vec<Cell> = table
        .columns()
        .iter()
        .map(|column| Cell::from(header_label(table, column)))
        .collect();
    Row::new(cells).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn build_row<'a>(
    entry: &'a FileEntry,
    table: &TableState,
    widths: &[u16],
    ctx: &RenderContext,
    icon_renderer: &IconRenderer,
) -> Row<'a> {
    let selected = table.is_selected(&entry.id);

    let cells: Vec<Cell> = table
        .columns()
        .iter()
        .zip(widths)
        .map(|(column, &width)| match column.kind {
            ColumnKind::Select => Cell::from(CheckState::from_bool(selected).symbol().to_string()),
            ColumnKind::Action => {
                Cell::from(Span::styled(ACTIONS_TRIGGER, Style::default().fg(Color::Gray)))
            }
            ColumnKind::Text { .. } => {
                let text = column.render_cell(entry, ctx).unwrap_or_default();
                if column.id == filedeck::ColumnId::FileName {
                    let icon = icon_renderer.entry_icon(&entry.name);
                    let name_width = (width as usize).saturating_sub(3);
                    Cell::from(Line::from(vec![
                        icon,
                        Span::raw(truncate_to_width(&text, name_width)),
                    ]))
                } else {
                    Cell::from(Span::styled(
                        truncate_to_width(&text, width as usize),
                        Style::default().fg(Color::Gray),
                    ))
                }
            }
        })
        .collect();

    let row = Row::new(cells);
    if selected {
        row.style(Style::default().fg(Color::LightGreen))
    } else {
        row
    }
}

/// Render the file table
///
/// Returns where the header and the cursor row landed on screen, for
/// anchoring popup menus.
pub fn render_file_table(
    f: &mut Frame,
    area: Rect,
    table: &TableState,
    ctx: &RenderContext,
    icon_renderer: &IconRenderer,
    focused: bool,
) -> TableAnchors {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Files ({}) ", table.total_count()))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let rects = column_rects(table.columns(), inner);
    let widths: Vec<u16> = rects.iter().map(|r| r.width).collect();

    let header_x = table
        .columns()
        .iter()
        .position(|c| c.is_sortable())
        .and_then(|idx| rects.get(idx))
        .map(|r| r.x)
        .unwrap_or(inner.x);
    let mut anchors = TableAnchors {
        header: (header_x, inner.y),
        cursor_row: None,
        cursor_actions: None,
    };

    let highlight_style = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let constraints = column_constraints(table.columns());
    let header = build_header(table);

    match table.body() {
        TableBody::Rows(entries) => {
            let rows: Vec<Row> = entries
                .into_iter()
                .map(|entry| build_row(entry, table, &widths, ctx, icon_renderer))
                .collect();

            let widget = Table::new(rows, constraints)
                .header(header)
                .block(block)
                .column_spacing(COLUMN_SPACING)
                .row_highlight_style(highlight_style)
                .highlight_symbol(HIGHLIGHT_SYMBOL)
                .highlight_spacing(HighlightSpacing::Always);

            let mut view_state = ViewState::default().with_selected(table.cursor());
            f.render_stateful_widget(widget, area, &mut view_state);

            // Header takes the first inner line
            if let Some(cursor) = table.cursor() {
                let line = cursor.saturating_sub(view_state.offset()) as u16;
                let y = inner.y + 1 + line;
                let name_x = rects.get(1).map(|r| r.x).unwrap_or(inner.x);
                let actions_x = rects.last().map(|r| r.x).unwrap_or(inner.x);
                anchors.cursor_row = Some((name_x, y));
                anchors.cursor_actions = Some((actions_x, y));
            }
        }
        TableBody::Empty { message, colspan } => {
            let widget = Table::new(Vec::<Row>::new(), constraints)
                .header(header)
                .block(block)
                .column_spacing(COLUMN_SPACING)
                .highlight_symbol(HIGHLIGHT_SYMBOL)
                .highlight_spacing(HighlightSpacing::Always);
            f.render_widget(widget, area);

            // One cell spanning the first `colspan` columns
            if let (Some(first), Some(last)) = (rects.first(), rects.get(colspan.saturating_sub(1))) {
                if inner.height > 1 {
                    let placeholder_area = Rect {
                        x: first.x,
                        y: inner.y + 1,
                        width: (last.x + last.width).saturating_sub(first.x),
                        height: 1,
                    };
                    let placeholder = Paragraph::new(message)
                        .alignment(Alignment::Center)
                        .style(Style::default().fg(Color::DarkGray));
                    f.render_widget(placeholder, placeholder_area);
                }
            }
        }
    }

    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedeck::model::columns::file_columns;

    #[test]
    fn test_column_rects_follow_basis() {
        let inner = Rect::new(1, 1, 98, 20);
        let rects = column_rects(&file_columns(), inner);
        assert_eq!(rects.len(), 4);
        // Highlight symbol column comes first
        assert_eq!(rects[0].x, 3);
        // Name column is the widest
        assert!(rects[1].width > rects[2].width);
        assert!(rects[2].width > rects[3].width);
        // Columns stay inside the block
        let last = rects[3];
        assert!(last.x + last.width <= inner.x + inner.width);
    }
}
