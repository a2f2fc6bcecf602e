//! Documentation data model and remote site addressing
//!
//! Every value in this module is request-scoped: built fresh for a single call,
//! never mutated after construction and never cached.

use serde::{Deserialize, Serialize};

/// Default documentation host for the JUCE class reference
pub const DEFAULT_BASE_URL: &str = "https://ccrma.stanford.edu/~jos/juce_modules";

/// Resource URI that lists every known class
pub const CLASS_LIST_URI: &str = "juce://classes";

/// Resource URI template for a single class document
pub const CLASS_URI_TEMPLATE: &str = "juce://class/{className}";

const CLASS_URI_PREFIX: &str = "juce://class/";

/// Structured documentation for one class page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDocument {
    /// The name the document was requested under, never re-read from the page
    pub class_name: String,
    pub description: String,
    pub methods: Vec<MethodEntry>,
    pub properties: Vec<PropertyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<String>,
    pub url: String,
}

/// A documented member function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,
    pub signature: String,
    pub description: String,
}

/// A row from a page's field table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

/// Addresses of the remote documentation pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsSite {
    base_url: String,
}

impl DocsSite {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the class-catalog index page
    pub fn index_url(&self) -> String {
        format!("{}/annotated.html", self.base_url)
    }

    /// URL of a single class page
    pub fn class_url(&self, class_name: &str) -> String {
        format!("{}/class{class_name}.html", self.base_url)
    }
}

impl Default for DocsSite {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Resource URI pointing at a class document
pub fn class_resource_uri(class_name: &str) -> String {
    format!("{CLASS_URI_PREFIX}{class_name}")
}

/// Recover the class name from a `juce://class/{className}` URI
pub fn class_name_from_uri(uri: &str) -> Option<&str> {
    uri.strip_prefix(CLASS_URI_PREFIX)
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_urls() {
        let site = DocsSite::new("https://docs.example.com/juce");
        assert_eq!(site.index_url(), "https://docs.example.com/juce/annotated.html");
        assert_eq!(
            site.class_url("ValueTree"),
            "https://docs.example.com/juce/classValueTree.html"
        );
    }

    #[test]
    fn test_site_trailing_slash_ignored() {
        let site = DocsSite::new("https://docs.example.com/juce/");
        assert_eq!(site.base_url(), "https://docs.example.com/juce");
        assert_eq!(site.index_url(), "https://docs.example.com/juce/annotated.html");
    }

    #[test]
    fn test_default_site() {
        let site = DocsSite::default();
        assert_eq!(
            site.class_url("String"),
            "https://ccrma.stanford.edu/~jos/juce_modules/classString.html"
        );
    }

    #[test]
    fn test_class_resource_uri_roundtrip() {
        let uri = class_resource_uri("AudioBuffer");
        assert_eq!(uri, "juce://class/AudioBuffer");
        assert_eq!(class_name_from_uri(&uri), Some("AudioBuffer"));
    }

    #[test]
    fn test_class_name_from_uri_rejects_other_uris() {
        assert_eq!(class_name_from_uri(CLASS_LIST_URI), None);
        assert_eq!(class_name_from_uri("juce://class/"), None);
        assert_eq!(class_name_from_uri("juce://class/a/b"), None);
        assert_eq!(class_name_from_uri("https://example.com"), None);
    }

    #[test]
    fn test_property_type_serializes_as_type() {
        let prop = PropertyEntry {
            name: "gain".to_string(),
            type_name: "float".to_string(),
            description: String::new(),
        };
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "float");
    }

    #[test]
    fn test_absent_inheritance_is_skipped() {
        let doc = ClassDocument {
            class_name: "Foo".to_string(),
            description: String::new(),
            methods: vec![],
            properties: vec![],
            inheritance: None,
            url: "https://example.com/classFoo.html".to_string(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("inheritance").is_none());
    }
}
