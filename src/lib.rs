//! # instructivo
//!
//! Content formatter for the university admissions guide ("instructivo").
//!
//! ## Features
//!
//! - **Markup → HTML**: `**bold**` headings, `•` bullet lists, blank-line
//!   paragraphs, raw `<table>` pass-through
//! - **Never fails**: malformed markup degrades to literal text
//! - **Externalized content**: steps, PDFs and modalities live in a TOML
//!   catalog instead of code
//! - **Page helpers**: PDF viewer URLs, dialog view state, step rendering
//! - **WASM Support**: compiles to WebAssembly for the browser host
//!
//! ## Usage Examples
//!
//! ### Formatting
//!
//! ```rust
//! use instructivo::format_text;
//!
//! let html = format_text(Some("**Requisitos**\n• Cédula\n• Diploma"));
//! assert!(html.contains("Requisitos</h5>"));
//! assert_eq!(html.matches("<li").count(), 2);
//!
//! assert_eq!(format_text(None), "");
//! ```
//!
//! ### Content catalog
//!
//! ```rust
//! use instructivo::{render_catalog, ContentCatalog};
//!
//! let catalog = ContentCatalog::builtin().unwrap();
//! let steps = render_catalog(&catalog, None);
//! assert_eq!(steps.len(), catalog.steps.len());
//! ```

/// Core formatting engine
pub mod core;

/// Data layer - authored content
pub mod data;

/// Feature modules - page-level helpers
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core formatting functions
pub use crate::core::formatter::options::{
    DEFAULT_HEADING_CLASS, DEFAULT_LIST_CLASS, DEFAULT_LIST_ITEM_CLASS, DEFAULT_PARAGRAPH_CLASS,
};
pub use crate::core::{format_text, format_text_with_options, FormatOptions};

// Re-export data modules
pub use data::content;
pub use data::{ContentCatalog, Modality, Notices, PdfDocument, Step};

// Re-export feature modules
pub use features::dialogs;
pub use features::render;
pub use features::viewer;
pub use features::{
    google_viewer_url, render_catalog, render_step, DialogKind, DialogPhase, RenderedStep,
    ViewState,
};

// Re-export utilities
pub use utils::error::{ContentIssue, InstructivoError, InstructivoResult, IssueLevel};

/// Format a string slice, treating empty input like absent input
///
/// Convenience for callers that always hold a `&str`.
pub fn format_str(input: &str) -> String {
    format_text(Some(input))
}

/// Detect whether text takes the table pass-through path
pub fn has_table_block(input: &str) -> bool {
    input.contains(crate::core::formatter::TABLE_OPEN)
}
