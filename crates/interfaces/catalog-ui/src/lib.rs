mod app;
mod components;
mod screens;
mod theme;
mod utils;

use catalog_app_core::{CatalogApplication, Presentation};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([340.0, 400.0])
            .with_title("CATALOG // PRODUCTS"),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let core = CatalogApplication::connect(Presentation::default()).inspect_err(|e| {
                tracing::error!("Failed to set up catalog client: {e:#}");
            })?;

            Ok(Box::new(app::CatalogUiApp::new(core)))
        }),
    )
}
