//! Class page extraction
//!
//! Turns the HTML of one class page into a [`ClassDocument`]. Extraction is
//! field-tolerant: every field is located independently and anything that
//! cannot be found degrades to an empty string, an empty list or `None`. No
//! markup shape makes this module fail.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::catalog::{ClassDocument, MethodEntry, PropertyEntry};
use crate::rules::ExtractionRules;

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t\u{a0}]*(?:\n[ \t\u{a0}]*)+").expect("blank line pattern is valid")
});

/// Build a [`ClassDocument`] from a fetched class page
///
/// `class_name` and `url` are copied into the document as given; the page is
/// never consulted for either.
pub fn extract_class_document(
    class_name: &str,
    url: &str,
    html: &str,
    rules: &ExtractionRules,
) -> ClassDocument {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let description = root
        .select(&rules.description)
        .next()
        .map(|el| block_text(&element_text(el)))
        .unwrap_or_default();

    let methods = root
        .select(&rules.member_item)
        .map(|item| extract_method(item, rules))
        .collect();

    let properties = root
        .select(&rules.field_row)
        .filter_map(|row| extract_property(row, rules))
        .collect();

    // Last caption wins.
    let inheritance = root
        .select(&rules.inheritance)
        .last()
        .map(|el| line_text(&element_text(el)))
        .filter(|text| !text.is_empty());

    ClassDocument {
        class_name: class_name.to_string(),
        description,
        methods,
        properties,
        inheritance,
        url: url.to_string(),
    }
}

fn extract_method(item: ElementRef<'_>, rules: &ExtractionRules) -> MethodEntry {
    let name = first_text(item, &rules.member_name)
        .map(|text| method_name(&text))
        .unwrap_or_default();
    let signature = first_text(item, &rules.member_signature)
        .map(|text| line_text(&text))
        .unwrap_or_default();
    let description = first_text(item, &rules.member_doc)
        .map(|text| block_text(&text))
        .unwrap_or_default();

    MethodEntry {
        name,
        signature,
        description,
    }
}

/// Header rows carry none of the field cells and yield no entry
fn extract_property(row: ElementRef<'_>, rules: &ExtractionRules) -> Option<PropertyEntry> {
    let name = first_text(row, &rules.field_name);
    let type_name = first_text(row, &rules.field_type);
    let description = first_text(row, &rules.field_doc);

    if name.is_none() && type_name.is_none() && description.is_none() {
        return None;
    }

    Some(PropertyEntry {
        name: name.map(|text| line_text(&text)).unwrap_or_default(),
        type_name: type_name.map(|text| line_text(&text)).unwrap_or_default(),
        description: description.map(|text| block_text(&text)).unwrap_or_default(),
    })
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Member identifier: everything before the parameter list
fn method_name(text: &str) -> String {
    let head = text.split('(').next().unwrap_or_default();
    line_text(head)
}

/// Collapse every whitespace run, including non-breaking spaces, to one space
fn line_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim a multi-line block and squeeze runs of blank lines into one
fn block_text(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let joined = lines.join("\n");
    BLANK_LINES.replace_all(joined.trim(), "\n\n").into_owned()
}
