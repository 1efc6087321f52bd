//! Feature modules - page-level helpers around the formatter
//!
//! This module contains the pieces a host page needs besides formatting:
//! - PDF viewer URLs
//! - Dialog view state
//! - Step rendering

pub mod dialogs;
pub mod render;
pub mod viewer;

// Re-export commonly used types
pub use dialogs::{DialogKind, DialogPhase, ViewState, CLOSE_TRANSITION};
pub use render::{render_catalog, render_step, RenderedModality, RenderedPdf, RenderedStep};
pub use viewer::google_viewer_url;
