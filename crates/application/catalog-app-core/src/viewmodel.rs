use crate::domain::{CatalogState, CatalogStatus};
use crate::expansion::ExpansionState;
use catalog_core::{description_preview, price_label, EllipsisPolicy, Product, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const LOADING_LABEL: &str = "Loading...";
pub const READ_MORE_LABEL: &str = "Read more";
pub const SHOW_LESS_LABEL: &str = "Show Less";

fn format_fetched_at(ts: Option<DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn format_rating(product: &Product) -> Option<String> {
    product
        .rating
        .as_ref()
        .map(|r| format!("{:.1} / 5 ({} reviews)", r.rate, r.count))
}

/// How descriptions are shaped on collapsed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub preview_chars: usize,
    pub ellipsis: EllipsisPolicy,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            preview_chars: catalog_config::DESCRIPTION_PREVIEW_CHARS,
            ellipsis: EllipsisPolicy::Always,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardVm {
    pub index: usize,
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
    pub description: String,
    pub expanded: bool,
    pub toggle_label: &'static str,
    pub image_url: String,
    pub category: Option<String>,
    pub rating_label: Option<String>,
}

pub fn product_card_vm(
    index: usize,
    product: &Product,
    expanded: bool,
    presentation: &Presentation,
) -> ProductCardVm {
    let description = if expanded {
        product.description.clone()
    } else {
        description_preview(
            &product.description,
            catalog_config::clamp_preview_chars(presentation.preview_chars),
            catalog_config::ELLIPSIS,
            presentation.ellipsis,
        )
    };

    ProductCardVm {
        index,
        id: product.id,
        title: product.title.clone(),
        price_label: price_label(product.price),
        description,
        expanded,
        toggle_label: if expanded {
            SHOW_LESS_LABEL
        } else {
            READ_MORE_LABEL
        },
        image_url: product.image_url.clone(),
        category: product.category.clone(),
        rating_label: format_rating(product),
    }
}

/// What the catalog view shows. Loading wins over error, error wins over the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogVm {
    Loading {
        label: &'static str,
    },
    Error {
        message: String,
    },
    Grid {
        cards: Vec<ProductCardVm>,
        fetched_at: Option<String>,
    },
}

impl CatalogVm {
    /// Single-line text the view shows for non-grid states.
    pub fn status_text(&self) -> Option<String> {
        match self {
            CatalogVm::Loading { label } => Some((*label).to_string()),
            CatalogVm::Error { message } => Some(format!("Error: {message}")),
            CatalogVm::Grid { .. } => None,
        }
    }

    pub fn cards(&self) -> &[ProductCardVm] {
        match self {
            CatalogVm::Grid { cards, .. } => cards,
            _ => &[],
        }
    }
}

pub fn catalog_vm(
    state: &CatalogState,
    expansion: &ExpansionState,
    presentation: &Presentation,
) -> CatalogVm {
    // Flags from an earlier catalog never leak onto a new one.
    let fresh;
    let expansion = if expansion.matches(state) {
        expansion
    } else {
        fresh = ExpansionState::for_state(state);
        &fresh
    };

    match &state.status {
        CatalogStatus::Loading => CatalogVm::Loading {
            label: LOADING_LABEL,
        },
        CatalogStatus::Failed(message) => CatalogVm::Error {
            message: message.clone(),
        },
        CatalogStatus::Ready => CatalogVm::Grid {
            cards: state
                .products
                .iter()
                .enumerate()
                .map(|(ix, p)| product_card_vm(ix, p, expansion.is_expanded(ix), presentation))
                .collect(),
            fetched_at: format_fetched_at(state.fetched_at),
        },
    }
}
