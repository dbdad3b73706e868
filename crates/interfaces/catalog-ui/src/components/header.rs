use crate::theme::*;
use crate::utils::{outline_button, ButtonTone};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub refresh_clicked: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    is_loading: bool,
    product_count: usize,
    fetched_at: Option<&str>,
) -> HeaderResponse {
    let mut refresh_clicked = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(10.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_HEADER)
            .with_border_color(COL_OUTLINE)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new("Storefront").size(18.0).strong().color(COL_INK));
                tui.label(egui::RichText::new(format!("{product_count} products")).color(COL_MUTED));
                if let Some(ts) = fetched_at {
                    tui.label(egui::RichText::new(format!("updated {ts}")).size(10.0).color(COL_MUTED));
                }
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if is_loading {
                    tui.ui_add(egui::Spinner::new().color(COL_BUSY));
                    tui.label(egui::RichText::new("Fetching products").color(COL_BUSY));
                }

                let resp = tui.ui(|ui| outline_button(ui, "Refresh", ButtonTone::Neutral, !is_loading));
                refresh_clicked |= resp.clicked();
            });
        },
    );

    HeaderResponse { refresh_clicked }
}
