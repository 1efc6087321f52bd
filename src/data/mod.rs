//! Data layer - authored content
//!
//! This module contains the structured content consumed by the formatter:
//! - Steps, PDF documents and enrollment modalities
//! - Notice dialog bodies

pub mod content;

// Re-export commonly used items
pub use content::{ContentCatalog, Modality, Notices, PdfDocument, Step, BUILTIN_CONTENT};
