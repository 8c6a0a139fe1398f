use crate::podcasts::CategoryCounts;
use crate::theme;
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

/// Horizontal bar chart of podcasts per category, largest at the top.
pub fn render_category_chart(ui: &mut egui::Ui, counts: &CategoryCounts) {
    ui.vertical_centered(|ui| {
        ui.heading("Number of Podcasts by Categories");
    });

    let sorted = counts.sorted_by_count();
    if sorted.is_empty() {
        ui.label(egui::RichText::new("No podcasts loaded.").weak());
        return;
    }

    let n = sorted.len();
    let labels: Vec<String> = sorted.iter().map(|(c, _)| (*c).to_owned()).collect();
    let max_count = sorted.first().map_or(1, |(_, c)| *c) as f64;

    let bars: Vec<Bar> = sorted
        .iter()
        .enumerate()
        .map(|(i, (category, count))| {
            Bar::new(bar_position(n, i), *count as f64)
                .name(*category)
                .fill(theme::palette_color(i))
                .width(0.8)
        })
        .collect();

    let chart = BarChart::new("Podcasts", bars)
        .horizontal()
        .element_formatter(Box::new(|bar, _| {
            format!("{}\nCount: {}", bar.name, bar.value)
        }));

    Plot::new("category_counts")
        .height(500.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_grid([true, false])
        .include_x(0.0)
        .include_x(max_count * 1.05)
        .x_axis_label("Count")
        .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// First category sits on top: the highest axis position
fn bar_position(n: usize, index: usize) -> f64 {
    (n - 1 - index) as f64
}

fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    let n = labels.len();
    let position = rounded as usize;
    if position >= n {
        return String::new();
    }
    labels.get(n - 1 - position).cloned().unwrap_or_default()
}
