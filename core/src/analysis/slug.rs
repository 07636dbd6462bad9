//! Build identity slugs
//!
//! A slug is `{subclasses}-{set1}-{set2}`: the lower-cased subclass
//! abbreviations sorted alphabetically, then the slugs of the top signature
//! sets sorted alphabetically and padded with "unknown". It depends only on
//! classified attributes, never on input order.

use crate::telemetry::SetCounts;

/// Placeholder for a missing signature set
pub const UNKNOWN_SET: &str = "unknown";

/// "Kinras's Wrath" -> "kinrass-wrath"
pub fn set_slug(set_name: &str) -> String {
    set_name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Names of the sets with at least `min_pieces`, highest count first,
/// at most `limit` of them. Equal counts are ordered by name.
pub fn signature_sets(counts: &SetCounts, min_pieces: u32, limit: usize) -> Vec<String> {
    counts
        .ranked()
        .into_iter()
        .filter(|(_, count)| *count >= min_pieces)
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}

pub fn build_slug(
    subclasses: &[String],
    counts: &SetCounts,
    min_pieces: u32,
    limit: usize,
) -> String {
    let mut classes: Vec<String> = subclasses.iter().map(|s| s.to_lowercase()).collect();
    classes.sort();

    let mut sets: Vec<String> = signature_sets(counts, min_pieces, limit)
        .iter()
        .map(|name| set_slug(name))
        .collect();
    sets.sort();
    sets.resize(limit, UNKNOWN_SET.to_string());

    let mut parts = classes;
    parts.extend(sets);
    parts.join("-")
}
