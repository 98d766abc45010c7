/// Maximum number of suggestions surfaced for a query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Case-insensitive substring search over the deputies list.
///
/// An empty (or whitespace-only) query yields no suggestions. Matches are
/// capped at [`MAX_SUGGESTIONS`] in list order and only then sorted
/// ascending by name length, so shorter names surface first within the
/// capped window.
pub fn find_suggestions(deputies: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<String> = deputies
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();
    matches.sort_by_key(|name| name.chars().count());
    matches
}
