//! Central configuration constants for the catalog client and its views.

/// Product catalog endpoint used when no override is given.
pub const DEFAULT_PRODUCTS_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Number of description characters shown on a collapsed card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// Marker appended after a collapsed description preview.
pub const ELLIPSIS: &str = "...";

/// Capacity of the kernel's event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// User agent sent with every catalog request.
pub const USER_AGENT: &str = concat!("catalog/", env!("CARGO_PKG_VERSION"));

/// Clamp a requested preview length to something that can show at least one character.
pub fn clamp_preview_chars(v: usize) -> usize {
    v.max(1)
}
