use crate::components::product_card;
use crate::theme::*;
use crate::utils::{grid_title, outline_button, ButtonTone};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use catalog_app_core::viewmodel::CatalogVm;

#[derive(Default)]
pub struct CatalogResponse {
    pub toggled: Option<usize>,
    pub retry: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &CatalogVm) -> CatalogResponse {
    let mut resp = CatalogResponse::default();

    match vm {
        CatalogVm::Loading { label } => {
            tui.style(taffy::Style {
                flex_grow: 1.0,
                justify_content: Some(taffy::JustifyContent::Center),
                align_items: Some(taffy::AlignItems::Center),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new(*label).size(30.0).color(COL_INK));
            });
        }

        CatalogVm::Error { .. } => {
            let text = vm.status_text().unwrap_or_default();
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                gap: length(8.0),
                justify_content: Some(taffy::JustifyContent::Center),
                align_items: Some(taffy::AlignItems::Center),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new(text).color(COL_DANGER));
                if tui.ui(|ui| outline_button(ui, "Retry", ButtonTone::Danger, true)).clicked() {
                    resp.retry = true;
                }
            });
        }

        CatalogVm::Grid { cards, .. } => {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                gap: length(8.0),
                size: percent(1.),
                overflow: taffy::Point {
                    x: taffy::Overflow::Hidden,
                    y: taffy::Overflow::Scroll,
                },
                min_size: taffy::Size {
                    width: length(0.0),
                    height: length(0.0),
                },
                ..Default::default()
            })
            .add(|tui| {
                tui.ui(|ui| grid_title(ui, "Products", cards.len()));

                tui.style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Row,
                    flex_wrap: taffy::FlexWrap::Wrap,
                    justify_content: Some(taffy::JustifyContent::Center),
                    align_items: Some(taffy::AlignItems::Start),
                    gap: length(12.0),
                    size: taffy::Size {
                        width: percent(1.),
                        height: auto(),
                    },
                    ..Default::default()
                })
                .add(|tui| {
                    for card in cards {
                        if product_card::draw(&mut *tui, card) {
                            resp.toggled = Some(card.index);
                        }
                    }
                });
            });
        }
    }

    resp
}
