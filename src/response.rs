//! Parsing of raw model output into a normalized tag list
//!
//! The model is instructed to answer with a bare `tag1,tag2,tag3` line, but
//! small local models routinely append explanations or punctuation. Parsing
//! is therefore defensive: only the first word of each comma segment counts.

/// Maximum number of tags kept from a response
pub const MAX_TAGS: usize = 3;

/// Parses raw generated text into at most [`MAX_TAGS`] normalized tags
///
/// Splits on commas, trims whitespace, drops empty segments, truncates to
/// three segments, then normalizes each retained segment. Idempotent: running
/// it over its own joined output yields the same list.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(MAX_TAGS)
        .map(normalize_tag)
        .collect()
}

/// Normalizes one comma segment into a tag
///
/// Keeps only the first whitespace-delimited token, strips trailing periods,
/// and lowercases. Guards against the model tacking prose onto a tag.
fn normalize_tag(segment: &str) -> String {
    segment
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches('.')
        .to_lowercase()
}
