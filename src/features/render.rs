//! Step rendering
//!
//! Runs every text block of a step through the formatter and collects the
//! HTML fragments a host binds into its dialog. Plain-text fields
//! (titles, requirements, tips) are escaped; formatted fields are trusted
//! markup and pass through the formatter unescaped.

use serde::Serialize;

use crate::core::formatter::{format_text_with_options, FormatOptions};
use crate::data::content::{ContentCatalog, Step};
use crate::features::viewer::google_viewer_url;

/// A PDF tab with its viewer URL resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPdf {
    pub name: String,
    pub url: String,
    pub viewer_url: String,
}

/// A modality tab with its body formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedModality {
    pub name: String,
    pub html: String,
}

/// HTML fragments of one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedStep {
    pub number: u32,
    pub title: String,
    pub description: String,
    /// Formatted `detailed_info`, empty when absent
    pub detailed_info: String,
    /// `<ul>` of requirements, empty when there are none
    pub requirements: String,
    /// `<ul>` of tips, empty when there are none
    pub tips: String,
    pub pdfs: Vec<RenderedPdf>,
    pub modalities: Vec<RenderedModality>,
}

/// Render one step
///
/// `origin` is the page origin used for PDF viewer URLs; `None` keeps the
/// relative PDF paths.
pub fn render_step(step: &Step, options: &FormatOptions, origin: Option<&str>) -> RenderedStep {
    RenderedStep {
        number: step.number,
        title: escape_html(&step.title),
        description: escape_html(&step.description),
        detailed_info: format_text_with_options(step.detailed_info.as_deref(), options),
        requirements: item_list(&step.requirements, options),
        tips: item_list(&step.tips, options),
        pdfs: step
            .pdfs
            .iter()
            .map(|pdf| RenderedPdf {
                name: escape_html(&pdf.name),
                url: pdf.url.clone(),
                viewer_url: google_viewer_url(origin, &pdf.url),
            })
            .collect(),
        modalities: step
            .modalities
            .iter()
            .map(|modality| RenderedModality {
                name: escape_html(&modality.name),
                html: format_text_with_options(Some(&modality.content), options),
            })
            .collect(),
    }
}

/// Render every step of a catalog with the catalog's own style classes
pub fn render_catalog(catalog: &ContentCatalog, origin: Option<&str>) -> Vec<RenderedStep> {
    let options = catalog.format_options();
    catalog
        .steps
        .iter()
        .map(|step| render_step(step, &options, origin))
        .collect()
}

fn item_list(items: &[String], options: &FormatOptions) -> String {
    if items.is_empty() {
        return String::new();
    }

    let item_open = options.list_item_open();
    let mut html = options.list_open();
    for item in items {
        html.push_str(&item_open);
        html.push_str(&escape_html(item));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Escape text for use inside HTML elements and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
