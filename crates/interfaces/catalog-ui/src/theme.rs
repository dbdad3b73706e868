use eframe::egui::{self, Color32, CornerRadius, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Storefront palette: light page, white cards, red read-more links.
pub const COL_PAGE: Color32 = Color32::from_rgb(243, 244, 246);
pub const COL_HEADER: Color32 = Color32::WHITE;
pub const COL_SURFACE: Color32 = Color32::WHITE;
pub const COL_OUTLINE: Color32 = Color32::from_rgb(209, 213, 219);
pub const COL_INK: Color32 = Color32::from_rgb(17, 24, 39);
pub const COL_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const COL_PRICE: Color32 = Color32::from_rgb(21, 128, 61);
pub const COL_BUSY: Color32 = Color32::from_rgb(180, 83, 9);
pub const COL_DANGER: Color32 = Color32::from_rgb(185, 28, 28);
pub const COL_TOGGLE: Color32 = Color32::from_rgb(220, 38, 38);

pub const CARD_WIDTH: f32 = 275.0;
pub const CARD_IMAGE_SIZE: [f32; 2] = [144.0, 96.0];
pub const CARD_RADIUS: f32 = 6.0;

fn storefront_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = COL_PAGE;
    visuals.window_fill = COL_SURFACE;
    visuals.extreme_bg_color = COL_SURFACE;
    visuals.hyperlink_color = COL_TOGGLE;

    let radius = CornerRadius::same(4);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.corner_radius = radius;
    }

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_OUTLINE);
    visuals.widgets.inactive.weak_bg_fill = COL_SURFACE;
    visuals.widgets.hovered.weak_bg_fill = COL_PAGE;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_INK);

    visuals.selection.bg_fill = COL_TOGGLE.linear_multiply(0.2);
    visuals.selection.stroke = Stroke::new(1.0, COL_TOGGLE);
    visuals
}

pub fn setup(ctx: &egui::Context) {
    ctx.set_visuals(storefront_visuals());

    ctx.style_mut(|style| {
        style.text_styles = [
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(11.0, FontFamily::Monospace)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(12.0, 4.0);
    });
}
