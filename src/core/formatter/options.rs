//! Style-class configuration for the markup formatter

use serde::{Deserialize, Serialize};

/// Default class of the `<h5>` emitted for `**bold**` runs
pub const DEFAULT_HEADING_CLASS: &str = "font-usco-bold text-usco-vino text-lg mb-2 mt-4";
/// Default class of every `<p>`
pub const DEFAULT_PARAGRAPH_CLASS: &str = "mb-3";
/// Default class of the `<ul>` that groups bullet lines
pub const DEFAULT_LIST_CLASS: &str = "space-y-1 mb-3";
/// Default class of each `<li>`
pub const DEFAULT_LIST_ITEM_CLASS: &str = "ml-4";

/// Options for markup to HTML formatting
///
/// Only the `class` attributes of the emitted tags are configurable; the
/// substitution rules themselves are fixed. An empty class renders the tag
/// without a `class` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Class of the `<h5>` heading produced by `**text**`
    /// Default: `font-usco-bold text-usco-vino text-lg mb-2 mt-4`
    pub heading_class: String,

    /// Class of each `<p>` paragraph
    /// Default: `mb-3`
    pub paragraph_class: String,

    /// Class of the `<ul>` wrapping consecutive bullet lines
    /// Default: `space-y-1 mb-3`
    pub list_class: String,

    /// Class of each `<li>` bullet item
    /// Default: `ml-4`
    pub list_item_class: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::usco()
    }
}

impl FormatOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// The admissions site's Tailwind classes
    pub fn usco() -> Self {
        Self {
            heading_class: DEFAULT_HEADING_CLASS.to_string(),
            paragraph_class: DEFAULT_PARAGRAPH_CLASS.to_string(),
            list_class: DEFAULT_LIST_CLASS.to_string(),
            list_item_class: DEFAULT_LIST_ITEM_CLASS.to_string(),
        }
    }

    /// Plain tags, no class attributes (for hosts with their own stylesheet)
    pub fn bare() -> Self {
        Self {
            heading_class: String::new(),
            paragraph_class: String::new(),
            list_class: String::new(),
            list_item_class: String::new(),
        }
    }

    pub(crate) fn heading_open(&self) -> String {
        open_tag("h5", &self.heading_class)
    }

    pub(crate) fn paragraph_open(&self) -> String {
        open_tag("p", &self.paragraph_class)
    }

    pub(crate) fn list_open(&self) -> String {
        open_tag("ul", &self.list_class)
    }

    pub(crate) fn list_item_open(&self) -> String {
        open_tag("li", &self.list_item_class)
    }
}

fn open_tag(tag: &str, class: &str) -> String {
    if class.is_empty() {
        format!("<{}>", tag)
    } else {
        format!("<{} class=\"{}\">", tag, class)
    }
}
