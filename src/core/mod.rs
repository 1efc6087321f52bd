//! Core conversion modules
//!
//! This module contains the markup engine:
//! - `formatter`: lightweight markup to HTML converter

pub mod formatter;

// Re-export main types and functions from formatter
pub use formatter::{format_text, format_text_with_options, FormatOptions};
