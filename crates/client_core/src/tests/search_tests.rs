use crate::search::{find_suggestions, MAX_SUGGESTIONS};

fn deputies(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn empty_query_yields_no_suggestions() {
    let list = deputies(&["Anna Muller", "Bob Alt"]);
    assert!(find_suggestions(&list, "").is_empty());
    assert!(find_suggestions(&list, "   ").is_empty());
}

#[test]
fn matches_case_insensitively_ordered_by_length() {
    let list = deputies(&["Anna Muller", "Bob Alt"]);
    let suggestions = find_suggestions(&list, "a");
    assert_eq!(suggestions, vec!["Bob Alt".to_string(), "Anna Muller".to_string()]);

    let suggestions = find_suggestions(&list, "MULLER");
    assert_eq!(suggestions, vec!["Anna Muller".to_string()]);
}

#[test]
fn query_is_trimmed_before_matching() {
    let list = deputies(&["Anna Muller"]);
    assert_eq!(find_suggestions(&list, " anna "), vec!["Anna Muller".to_string()]);
}

#[test]
fn caps_suggestions_at_ten() {
    let list: Vec<String> = (0..15).map(|i| format!("Abgeordnete Nr{i}")).collect();
    let suggestions = find_suggestions(&list, "abgeordnete");
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
}

#[test]
fn cap_applies_in_list_order_before_sorting() {
    // A short name past the cap window never surfaces, even though the
    // final ordering is by length.
    let mut list: Vec<String> = (0..MAX_SUGGESTIONS)
        .map(|i| format!("Langer Abgeordnetenname Nr{i}"))
        .collect();
    list.push("Al Ot".to_string());

    let suggestions = find_suggestions(&list, "a");
    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    assert!(!suggestions.contains(&"Al Ot".to_string()));
}

#[test]
fn no_matches_for_unrelated_query() {
    let list = deputies(&["Anna Muller", "Bob Alt"]);
    assert!(find_suggestions(&list, "xyz").is_empty());
}
