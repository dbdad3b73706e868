//! Text shaping shared by every catalog view.

/// When to put the ellipsis marker after a collapsed description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EllipsisPolicy {
    /// Append the marker to every collapsed description, even short ones.
    #[default]
    Always,
    /// Append the marker only when characters were actually cut.
    WhenTruncated,
}

/// First `max_chars` characters of `description`, followed by `ellipsis` per `policy`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn description_preview(
    description: &str,
    max_chars: usize,
    ellipsis: &str,
    policy: EllipsisPolicy,
) -> String {
    let cut = description
        .char_indices()
        .nth(max_chars)
        .map(|(ix, _)| ix)
        .unwrap_or(description.len());
    let truncated = cut < description.len();

    let mut out = String::with_capacity(cut + ellipsis.len());
    out.push_str(&description[..cut]);
    if truncated || policy == EllipsisPolicy::Always {
        out.push_str(ellipsis);
    }
    out
}

/// `Price: $<price>` using the shortest decimal that round-trips (`9.99`, `10`).
pub fn price_label(price: f64) -> String {
    format!("Price: ${price}")
}
