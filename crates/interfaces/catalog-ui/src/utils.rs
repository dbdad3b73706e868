use crate::theme::*;
use eframe::egui;

/// Outline colour of a header or status button.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Neutral,
    Danger,
}

impl ButtonTone {
    fn color(self) -> egui::Color32 {
        match self {
            ButtonTone::Neutral => COL_INK,
            ButtonTone::Danger => COL_DANGER,
        }
    }
}

/// Heading above the product grid.
pub fn grid_title(ui: &mut egui::Ui, text: &str, count: usize) {
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(text).color(COL_INK));
        ui.label(egui::RichText::new(format!("({count})")).color(COL_MUTED));
    });
}

pub fn outline_button(
    ui: &mut egui::Ui,
    label: &str,
    tone: ButtonTone,
    enabled: bool,
) -> egui::Response {
    let color = if enabled { tone.color() } else { COL_OUTLINE };
    let btn = egui::Button::new(egui::RichText::new(label).color(color))
        .fill(COL_SURFACE)
        .stroke(egui::Stroke::new(1.0, color));
    ui.add_enabled(enabled, btn)
}

/// Frameless text button, used for the per-card description toggle.
pub fn link_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(11.0).color(COL_TOGGLE))
            .frame(false),
    )
}

/// Wrapped body text that respects the width of its container.
pub fn wrapped_text(ui: &mut egui::Ui, text: egui::RichText) -> egui::Response {
    ui.add(egui::Label::new(text).wrap())
}
