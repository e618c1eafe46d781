//! Popup menu UI
//!
//! Renders an open menu as a bordered list next to the element it was
//! opened from. Separators are drawn as horizontal rules and never take
//! the highlight.

use filedeck::logic::layout::{menu_size, popup_origin};
use filedeck::logic::menu::MenuEntry;
use filedeck::model::MenuState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a popup menu anchored at `anchor`
pub fn render_menu(f: &mut Frame, menu: &MenuState, anchor: (u16, u16)) {
    let labels: Vec<&str> = menu
        .entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item { label, .. } => label.as_str(),
            MenuEntry::Separator => "",
        })
        .collect();

    let title = if menu.title.is_empty() {
        String::new()
    } else {
        format!(" {} ", menu.title)
    };
    let screen = f.area();
    let (width, height) = menu_size(&labels, title.width());
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let (x, y) = popup_origin(anchor, (width, height), (screen.width, screen.height));
    let menu_area = Rect {
        x,
        y,
        width,
        height,
    };

    let rule_width = width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = menu
        .entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item { label, .. } => {
                ListItem::new(Span::raw(label.clone())).style(Style::default().fg(Color::White))
            }
            MenuEntry::Separator => ListItem::new(Span::styled(
                "─".repeat(rule_width),
                Style::default().fg(Color::DarkGray),
            )),
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default().with_selected(menu.selected_index);
    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(list, menu_area, &mut state);
}
