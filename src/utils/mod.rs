//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Content issue reporting

pub mod error;

// Re-export commonly used items
pub use error::{ContentIssue, InstructivoError, InstructivoResult, IssueLevel};
