//! Plain-text and JSON renditions of the catalog view.

use catalog_app_core::viewmodel::{CatalogVm, ProductCardVm};
use std::fmt::Write;

pub fn render_card(out: &mut String, card: &ProductCardVm) {
    let _ = writeln!(out, "[{}] {}", card.id, card.title);
    if let Some(category) = &card.category {
        let _ = writeln!(out, "    Category: {category}");
    }
    let _ = writeln!(out, "    {}", card.price_label);
    if let Some(rating) = &card.rating_label {
        let _ = writeln!(out, "    Rating: {rating}");
    }
    for line in card.description.lines() {
        let _ = writeln!(out, "    {line}");
    }
    let _ = writeln!(out, "    ({})", card.toggle_label);
}

/// Status line for loading/error, otherwise a header followed by every card.
pub fn render_text(vm: &CatalogVm) -> String {
    if let Some(status) = vm.status_text() {
        return format!("{status}\n");
    }

    let mut out = String::new();
    let cards = vm.cards();
    let _ = writeln!(out, "Products ({})", cards.len());
    for card in cards {
        out.push('\n');
        render_card(&mut out, card);
    }
    out
}

pub fn render_json(cards: &[ProductCardVm]) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(cards)?;
    json.push('\n');
    Ok(json)
}
