use crate::App;
use chrono::Utc;
use filedeck::logic;
use filedeck::model::{MenuAnchor, MenuKind, RenderContext};
use ratatui::Frame;

use super::{breadcrumb, file_table, layout, legend, menu, status_bar, toast, toolbar};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let ui = &app.model.ui;
    let table = &app.model.table;

    let menu_kind = ui.menu.as_ref().map(|m| &m.kind);
    let has_filter = !table.filter_text().is_empty();

    let legend_height = legend::calculate_legend_height(
        size.width,
        ui.vim_mode,
        ui.filter_mode,
        has_filter,
        menu_kind.is_some(),
    );
    let layout_info = layout::calculate_layout(size, legend_height);

    let ellipsis_anchor = breadcrumb::render_breadcrumb(
        f,
        layout_info.breadcrumb_area,
        &app.model.navigation,
        &app.icon_renderer,
        menu_kind == Some(&MenuKind::Breadcrumb),
    );

    toolbar::render_filter_input(
        f,
        layout_info.filter_area,
        table.filter_text(),
        ui.filter_mode,
        table.visible_count(),
    );
    toolbar::render_add_new_button(
        f,
        layout_info.add_new_area,
        menu_kind == Some(&MenuKind::AddNew),
    );

    let ctx = RenderContext {
        now: Utc::now(),
        timestamp_mode: ui.timestamp_mode,
    };
    let table_anchors = file_table::render_file_table(
        f,
        layout_info.table_area,
        table,
        &ctx,
        &app.icon_renderer,
        !app.model.has_modal(),
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        ui.vim_mode,
        ui.filter_mode,
        has_filter,
        menu_kind.is_some(),
    );

    status_bar::render_status_bar(f, layout_info.status_area, table);

    // Popups go on top of everything else
    if let Some(open_menu) = &ui.menu {
        let anchor = match &open_menu.kind {
            MenuKind::RowActions { anchor, .. } => {
                let row_anchor = match anchor {
                    MenuAnchor::Dropdown => table_anchors.cursor_actions,
                    MenuAnchor::Context => table_anchors.cursor_row,
                };
                row_anchor.unwrap_or(table_anchors.header)
            }
            MenuKind::AddNew => {
                let area = layout_info.add_new_area;
                (area.x, area.y + area.height.saturating_sub(1))
            }
            MenuKind::Sort => table_anchors.header,
            MenuKind::Breadcrumb => ellipsis_anchor.unwrap_or((
                layout_info.breadcrumb_area.x,
                layout_info.breadcrumb_area.y + 1,
            )),
        };
        menu::render_menu(f, open_menu, anchor);
    }

    if let Some((message, _)) = &ui.toast_message {
        toast::render_toast(f, size, message);
    }

    // Paging keys move by what is on screen
    app.page_size = logic::layout::table_page_size(layout_info.table_area.height);
}
