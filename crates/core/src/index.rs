use std::collections::HashSet;

use scraper::Html;

use crate::rules::ExtractionRules;

/// Extract class names from the class-catalog index page
///
/// Walks the index listing rows in document order and keeps the first link of
/// each row whose href is shaped like a class page (`class<Name>.html`). Rows
/// with unrelated links (structs, namespaces, navigation) are skipped. A name
/// is emitted once, at its first position.
pub fn extract_class_names(html: &str, rules: &ExtractionRules) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for row in document.select(&rules.index_row) {
        let Some(href) = row
            .select(&rules.index_link)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            continue;
        };

        if let Some(name) = class_name_from_href(href, rules) {
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Strip the class-page prefix and suffix from an href
fn class_name_from_href<'a>(href: &'a str, rules: &ExtractionRules) -> Option<&'a str> {
    href.strip_prefix(rules.class_href_prefix.as_str())?
        .strip_suffix(rules.class_href_suffix.as_str())
        .filter(|name| !name.is_empty() && !name.contains('/'))
}
