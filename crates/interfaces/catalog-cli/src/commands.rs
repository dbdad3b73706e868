use crate::render::{render_card, render_json, render_text};
use anyhow::{bail, Result};
use catalog_app_core::viewmodel::{CatalogVm, Presentation};
use catalog_app_core::CatalogApplication;
use catalog_core::ProductId;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub endpoint: String,
    pub expand: Vec<ProductId>,
    pub presentation: Presentation,
    pub json: bool,
}

/// Mounts the view against `endpoint` and waits for the fetch to settle.
pub async fn load_view(endpoint: &str, presentation: Presentation) -> Result<CatalogApplication> {
    let mut view = CatalogApplication::connect_to(endpoint, presentation)?;

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching {endpoint}"));

    view.activate();
    view.settle().await;

    pb.finish_and_clear();
    Ok(view)
}

fn fail_on_error(vm: &CatalogVm) -> Result<()> {
    if let CatalogVm::Error { .. } = vm {
        bail!("{}", vm.status_text().unwrap_or_default());
    }
    Ok(())
}

pub async fn cmd_list(opts: ListOptions) -> Result<String> {
    let mut view = load_view(&opts.endpoint, opts.presentation).await?;

    for id in &opts.expand {
        if !view.expand_product(*id) {
            tracing::warn!("--expand {id}: no such product");
        }
    }

    let vm = view.vm();
    fail_on_error(&vm)?;

    if opts.json {
        render_json(vm.cards())
    } else {
        Ok(render_text(&vm))
    }
}

pub async fn cmd_show(endpoint: &str, id: ProductId, presentation: Presentation) -> Result<String> {
    let mut view = load_view(endpoint, presentation).await?;
    fail_on_error(&view.vm())?;

    if !view.expand_product(id) {
        bail!("Product {id} not found");
    }

    let vm = view.vm();
    let mut out = String::new();
    if let Some(card) = vm.cards().iter().find(|c| c.id == id) {
        render_card(&mut out, card);
    }
    Ok(out)
}
