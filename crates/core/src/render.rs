//! Markdown rendering
//!
//! Pure functions: identical input always renders byte-identical output.

use crate::catalog::{class_resource_uri, ClassDocument};

/// Heading used for the full class list
pub const CLASS_LIST_HEADING: &str = "JUCE Classes";

/// Heading used for search results
pub fn search_heading(query: &str) -> String {
    format!("Search Results for '{query}'")
}

/// Message returned when a class page could not be retrieved
pub fn not_found_message(class_name: &str) -> String {
    format!("Documentation for class '{class_name}' not found.")
}

/// Message returned when a search matched nothing
pub fn no_results_message(query: &str) -> String {
    format!("No classes found matching '{query}'.")
}

/// Render a heading followed by one linked bullet per name
///
/// An empty `names` slice renders the heading alone.
pub fn render_name_list<F>(heading: &str, names: &[String], link: F) -> String
where
    F: Fn(&str) -> String,
{
    let bullets = names
        .iter()
        .map(|name| format!("- [{name}]({})", link(name.as_str())))
        .collect::<Vec<_>>()
        .join("\n");

    format!("# {heading}\n\n{bullets}")
}

/// Render names linking to their `juce://class/{name}` resource
pub fn render_class_links(heading: &str, names: &[String]) -> String {
    render_name_list(heading, names, class_resource_uri)
}

/// Render a class document as Markdown
///
/// Section order is fixed: title, inheritance, description, source link,
/// methods, properties. The inheritance line and the two member sections are
/// left out entirely when there is nothing to put in them.
pub fn render_class_document(doc: &ClassDocument) -> String {
    let mut markdown = format!("# {}\n\n", doc.class_name);

    if let Some(inheritance) = &doc.inheritance {
        markdown.push_str(&format!("**Inheritance:** {inheritance}\n\n"));
    }

    markdown.push_str(&format!("{}\n\n", doc.description));
    markdown.push_str(&format!("[View Online Documentation]({})\n\n", doc.url));

    if !doc.methods.is_empty() {
        markdown.push_str("## Methods\n\n");
        for method in &doc.methods {
            markdown.push_str(&format!("### {}\n\n", method.name));
            markdown.push_str(&format!("```cpp\n{}\n```\n\n", method.signature));
            markdown.push_str(&format!("{}\n\n", method.description));
        }
    }

    if !doc.properties.is_empty() {
        markdown.push_str("## Properties\n\n");
        for property in &doc.properties {
            markdown.push_str(&format!("### {}\n\n", property.name));
            markdown.push_str(&format!("**Type:** {}\n\n", property.type_name));
            markdown.push_str(&format!("{}\n\n", property.description));
        }
    }

    markdown
}
