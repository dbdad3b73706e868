use crate::theme::*;
use crate::utils::{link_button, wrapped_text};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use catalog_app_core::viewmodel::ProductCardVm;

/// Draws one card. Returns true when its description toggle was clicked.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, card: &ProductCardVm) -> bool {
    let mut toggled = false;

    tui.id(egui_taffy::tid(("product", card.id)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Column,
            size: taffy::Size {
                width: length(CARD_WIDTH),
                height: auto(),
            },
            max_size: taffy::Size {
                width: length(CARD_WIDTH),
                height: auto(),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_SURFACE)
                .with_border_color(COL_OUTLINE)
                .with_border_width(1.0)
                .with_corner_radius(CARD_RADIUS),
            |tui| {
                tui.ui(|ui| {
                    ui.add(
                        egui::Image::new(card.image_url.as_str())
                            .fit_to_exact_size(egui::Vec2::from(CARD_IMAGE_SIZE))
                            .corner_radius(6),
                    )
                });

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    padding: length(12.0),
                    gap: length(6.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    if let Some(category) = &card.category {
                        tui.label(
                            egui::RichText::new(category.to_uppercase())
                                .size(9.0)
                                .color(COL_MUTED)
                                .monospace(),
                        );
                    }

                    tui.ui(|ui| {
                        wrapped_text(
                            ui,
                            egui::RichText::new(&card.title)
                                .size(12.0)
                                .strong()
                                .color(COL_INK),
                        )
                    });

                    tui.label(
                        egui::RichText::new(&card.price_label)
                            .size(12.0)
                            .color(COL_PRICE)
                            .strong(),
                    );

                    if let Some(rating) = &card.rating_label {
                        tui.label(egui::RichText::new(rating).size(10.0).color(COL_MUTED));
                    }

                    tui.ui(|ui| {
                        wrapped_text(
                            ui,
                            egui::RichText::new(&card.description)
                                .size(11.0)
                                .color(COL_MUTED),
                        )
                    });

                    if tui.ui(|ui| link_button(ui, card.toggle_label)).clicked() {
                        toggled = true;
                    }
                });
            },
        );

    toggled
}
