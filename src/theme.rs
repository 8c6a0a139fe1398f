use eframe::egui;
use egui::{Color32, CornerRadius, Margin, Stroke};

pub const ACCENT_COLOR: Color32 = Color32::from_rgb(0x0a, 0x93, 0x96);
pub const TOP_HEADER_COLOR: Color32 = Color32::from_rgb(0xe9, 0xd8, 0xa6);
pub const DIRECTORY_HEADER_COLOR: Color32 = ACCENT_COLOR;

/// Bar colours of the category chart, cycled when there are more categories.
pub const CATEGORY_PALETTE: [Color32; 20] = [
    Color32::from_rgb(0x00, 0x12, 0x19),
    Color32::from_rgb(0x00, 0x5f, 0x73),
    Color32::from_rgb(0x0a, 0x93, 0x96),
    Color32::from_rgb(0x94, 0xd2, 0xbd),
    Color32::from_rgb(0xe9, 0xd8, 0xa6),
    Color32::from_rgb(0xee, 0x9b, 0x00),
    Color32::from_rgb(0xca, 0x67, 0x02),
    Color32::from_rgb(0xbb, 0x3e, 0x03),
    Color32::from_rgb(0xae, 0x20, 0x12),
    Color32::from_rgb(0x9b, 0x22, 0x26),
    Color32::from_rgb(0x60, 0x6c, 0x38),
    Color32::from_rgb(0x28, 0x36, 0x18),
    Color32::from_rgb(0xfe, 0xfa, 0xe0),
    Color32::from_rgb(0xdd, 0xa1, 0x5e),
    Color32::from_rgb(0xbc, 0x6c, 0x25),
    Color32::from_rgb(0x2c, 0x6e, 0x49),
    Color32::from_rgb(0x4c, 0x95, 0x6c),
    Color32::from_rgb(0xfe, 0xfe, 0xe3),
    Color32::from_rgb(0xff, 0xc9, 0xb9),
    Color32::from_rgb(0xd6, 0x8c, 0x45),
];

// Spacing constants
pub const SPACING_SMALL: f32 = 8.0;
pub const SPACING_LARGE: f32 = 20.0;
pub const SPACING_HUGE: f32 = 40.0;

pub const MARGIN_CARD: f32 = 15.0;

pub fn palette_color(index: usize) -> Color32 {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

pub fn apply_dashboard_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.widgets.active.bg_fill = ACCENT_COLOR;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    visuals.widgets.hovered.corner_radius = CornerRadius::same(20);
    visuals.widgets.inactive.corner_radius = CornerRadius::same(20);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, ACCENT_COLOR);

    visuals.selection.bg_fill = ACCENT_COLOR.linear_multiply(0.4);
    visuals.hyperlink_color = ACCENT_COLOR;
    visuals.faint_bg_color = Color32::from_rgb(248, 248, 248);

    ctx.set_visuals(visuals);

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(MARGIN_CARD as i8))
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
}

/// Thick horizontal rule between dashboard sections.
pub fn section_rule(ui: &mut egui::Ui) {
    ui.add_space(SPACING_LARGE);
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 2.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, Color32::BLACK);
    ui.add_space(SPACING_LARGE);
}
