/// Keep the names that contain `query`, ignoring case
///
/// Relative order is preserved and there is no ranking. An empty query
/// matches every name.
pub fn filter_class_names(names: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();

    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
