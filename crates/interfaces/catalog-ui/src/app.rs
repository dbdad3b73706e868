use crate::components::header;
use crate::screens::catalog;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use catalog_app_core::viewmodel::CatalogVm;
use catalog_app_core::CatalogApplication;

pub struct CatalogUiApp {
    core: CatalogApplication,
}

impl CatalogUiApp {
    pub fn new(core: CatalogApplication) -> Self {
        Self { core }
    }
}

impl eframe::App for CatalogUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // First frame is the mount point.
        if self.core.activate() {
            tracing::info!("catalog view activated");
        }
        self.core.tick();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::new(3).unwrap_or(std::num::NonZeroUsize::MIN);
        });

        let vm = self.core.vm();
        let is_loading = matches!(vm, CatalogVm::Loading { .. });
        let (product_count, fetched_at) = match &vm {
            CatalogVm::Grid { cards, fetched_at } => (cards.len(), fetched_at.clone()),
            _ => (self.core.state().products.len(), None),
        };

        let mut refresh = false;
        let mut toggled = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(28.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp =
                            header::draw(tui, is_loading, product_count, fetched_at.as_deref());
                        refresh |= resp.refresh_clicked;
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        padding: length(12.0),
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = catalog::draw(tui, &vm);
                        refresh |= resp.retry;
                        toggled = resp.toggled;
                    });
                });
        });

        if let Some(index) = toggled {
            self.core.toggle(index);
        }
        if refresh {
            self.core.refresh();
        }

        // Keep polling while a fetch is outstanding; nothing else wakes the UI.
        if self.core.state().loading() {
            ctx.request_repaint();
        }
    }
}
