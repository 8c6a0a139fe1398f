use super::model::{Cell, TableRow, TableState};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

const ROW_HEIGHT: f32 = 26.0;

/// Sortable, paginated table of one view.
///
/// Clicking a header sorts by that column; clicking it again flips the
/// direction. Link cells open the podcast page.
pub fn render_view_table<R: TableRow>(
    ui: &mut egui::Ui,
    id: &str,
    rows: &[R],
    state: &mut TableState,
    header_color: egui::Color32,
) {
    if rows.is_empty() {
        ui.label(egui::RichText::new("No podcasts in this category.").weak());
        return;
    }

    let visible = state.visible_rows(rows);
    let columns = R::HEADERS.len();
    let mut clicked_header = None;

    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::initial(360.0).at_least(120.0), columns.saturating_sub(1))
            .column(Column::remainder().at_least(120.0))
            .min_scrolled_height(0.0)
            .max_scroll_height(300.0)
            .header(30.0, |mut header| {
                for (column, name) in R::HEADERS.iter().enumerate() {
                    header.col(|ui| {
                        let rect = ui.max_rect();
                        ui.painter().rect_filled(rect, 0.0, header_color);
                        let label = format!("{name} {}", sort_icon(state, column));
                        if ui
                            .add(egui::Button::new(egui::RichText::new(label).strong()).frame(false))
                            .clicked()
                        {
                            clicked_header = Some(column);
                        }
                    });
                }
            })
            .body(|mut body| {
                for &index in &visible {
                    let Some(row_data) = rows.get(index) else {
                        continue;
                    };
                    body.row(ROW_HEIGHT, |mut row| {
                        for column in 0..columns {
                            row.col(|ui| match row_data.cell(column) {
                                Cell::Text(text) => {
                                    ui.label(text);
                                }
                                Cell::Link(link) => {
                                    ui.hyperlink_to(link.label(), link.uri());
                                }
                            });
                        }
                    });
                }
            });
    });

    if let Some(column) = clicked_header {
        state.toggle_sort(column);
    }

    render_pager(ui, state, rows.len());
}

fn sort_icon(state: &TableState, column: usize) -> &'static str {
    match state.sort {
        Some(key) if key.column == column && key.ascending => icons::SORT_ASCENDING,
        Some(key) if key.column == column => icons::SORT_DESCENDING,
        _ => icons::ARROWS_DOWN_UP,
    }
}

fn render_pager(ui: &mut egui::Ui, state: &mut TableState, len: usize) {
    let pages = state.page_count(len);
    if pages <= 1 {
        return;
    }
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.page > 0, egui::Button::new(icons::CARET_LEFT))
            .clicked()
        {
            state.prev_page();
        }
        ui.label(format!("{} / {pages}", state.page + 1));
        if ui
            .add_enabled(state.page + 1 < pages, egui::Button::new(icons::CARET_RIGHT))
            .clicked()
        {
            state.next_page(len);
        }
    });
}
