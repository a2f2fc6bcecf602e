//! Core library for juce-docs
//!
//! This crate implements the **Functional Core** of the juce-docs application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`juce_docs_core`** (this crate): Pure transformation functions with zero I/O
//! - **`juce-docs`**: Page fetching, CLI and MCP server (the Imperative Shell)
//!
//! The shell fetches raw HTML and hands it to this crate; everything between the
//! HTML and the rendered Markdown happens here, so it can be tested with fixture
//! pages and no network.
//!
//! # Module Organization
//!
//! - [`catalog`]: Documentation data model and remote page addresses
//! - [`rules`]: Extraction rule set mapping logical fields to CSS selectors
//! - [`index`]: Class-catalog index page extraction
//! - [`class_page`]: Field-tolerant class page extraction
//! - [`search`]: Substring filter over class names
//! - [`render`]: Markdown rendering and fixed user-facing messages
//! - [`prompt`]: Prompt text offered to MCP clients
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use juce_docs_core::{class_page, render, rules::ExtractionRules};
//!
//! let rules = ExtractionRules::doxygen()?;
//! let doc = class_page::extract_class_document("ValueTree", url, &html, &rules);
//! let markdown = render::render_class_document(&doc);
//! ```

pub mod catalog;
pub mod class_page;
pub mod index;
pub mod prompt;
pub mod render;
pub mod rules;
pub mod search;
