pub mod advise;
pub mod inspect;

/// Comma-separated CLI roster list, trimmed, empties dropped.
pub fn parse_unit_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
