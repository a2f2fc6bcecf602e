//! Extraction rule set
//!
//! Maps each logical documentation field to the CSS selector that locates it in
//! the generated HTML. When the upstream generator changes its markup, only the
//! [`RuleSet`] needs to change; the extractors in [`crate::index`] and
//! [`crate::class_page`] never reference selector literals.

use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Errors raised while compiling a [`RuleSet`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid CSS selector for {field} '{selector}': {reason}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    #[error("Class href {0} must not be empty")]
    EmptyAffix(&'static str),
}

/// Selector strings for every extracted field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rows of the index page listing
    pub index_row: String,
    /// Link inside an index row
    pub index_link: String,
    /// Fixed prefix of a class page href (`class` in `classValueTree.html`)
    pub class_href_prefix: String,
    /// Fixed suffix of a class page href
    pub class_href_suffix: String,
    pub description: String,
    pub member_item: String,
    pub member_name: String,
    pub member_signature: String,
    pub member_doc: String,
    pub field_row: String,
    pub field_name: String,
    pub field_type: String,
    pub field_doc: String,
    pub inheritance: String,
}

impl RuleSet {
    /// Selectors for pages produced by Doxygen
    pub fn doxygen() -> Self {
        Self {
            index_row: ".directory tr.even, .directory tr.odd".to_string(),
            index_link: "td.entry a".to_string(),
            class_href_prefix: "class".to_string(),
            class_href_suffix: ".html".to_string(),
            description: ".contents .textblock".to_string(),
            member_item: ".memitem".to_string(),
            member_name: "td.memname".to_string(),
            member_signature: ".memproto".to_string(),
            member_doc: ".memdoc".to_string(),
            field_row: ".fieldtable tr".to_string(),
            field_name: ".fieldname".to_string(),
            field_type: ".fieldtype".to_string(),
            field_doc: ".fielddoc".to_string(),
            inheritance: ".inheritance".to_string(),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::doxygen()
    }
}

/// A [`RuleSet`] with every selector parsed
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pub(crate) index_row: Selector,
    pub(crate) index_link: Selector,
    pub(crate) class_href_prefix: String,
    pub(crate) class_href_suffix: String,
    pub(crate) description: Selector,
    pub(crate) member_item: Selector,
    pub(crate) member_name: Selector,
    pub(crate) member_signature: Selector,
    pub(crate) member_doc: Selector,
    pub(crate) field_row: Selector,
    pub(crate) field_name: Selector,
    pub(crate) field_type: Selector,
    pub(crate) field_doc: Selector,
    pub(crate) inheritance: Selector,
}

impl ExtractionRules {
    /// Parse every selector of `rules`, failing on the first invalid one
    pub fn compile(rules: &RuleSet) -> Result<Self, RuleError> {
        if rules.class_href_prefix.is_empty() {
            return Err(RuleError::EmptyAffix("prefix"));
        }
        if rules.class_href_suffix.is_empty() {
            return Err(RuleError::EmptyAffix("suffix"));
        }

        Ok(Self {
            index_row: parse("index_row", &rules.index_row)?,
            index_link: parse("index_link", &rules.index_link)?,
            class_href_prefix: rules.class_href_prefix.clone(),
            class_href_suffix: rules.class_href_suffix.clone(),
            description: parse("description", &rules.description)?,
            member_item: parse("member_item", &rules.member_item)?,
            member_name: parse("member_name", &rules.member_name)?,
            member_signature: parse("member_signature", &rules.member_signature)?,
            member_doc: parse("member_doc", &rules.member_doc)?,
            field_row: parse("field_row", &rules.field_row)?,
            field_name: parse("field_name", &rules.field_name)?,
            field_type: parse("field_type", &rules.field_type)?,
            field_doc: parse("field_doc", &rules.field_doc)?,
            inheritance: parse("inheritance", &rules.inheritance)?,
        })
    }

    /// Compiled Doxygen defaults
    pub fn doxygen() -> Result<Self, RuleError> {
        Self::compile(&RuleSet::doxygen())
    }
}

fn parse(field: &'static str, selector: &str) -> Result<Selector, RuleError> {
    Selector::parse(selector).map_err(|e| RuleError::InvalidSelector {
        field,
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    })
}
