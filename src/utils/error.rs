//! Error handling for Instructivo
//!
//! Formatting itself never fails. This module covers the fallible ambient
//! operations: reading content and configuration files, and the
//! non-fatal authoring issues reported by content validation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Instructivo error type
#[derive(Debug, Error)]
pub enum InstructivoError {
    /// IO error (for file operations)
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML content or config could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON content could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Content parsed but is unusable
    #[error("Invalid content: {message}")]
    InvalidContent { message: String },
}

/// Result type for Instructivo operations
pub type InstructivoResult<T> = Result<T, InstructivoError>;

// Convenience constructors for errors
impl InstructivoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstructivoError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        InstructivoError::InvalidContent {
            message: message.into(),
        }
    }
}

/// Severity of a content issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueLevel {
    /// Renders, but probably not as the author intended
    Warning,
    /// Content that a host cannot display correctly
    Error,
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLevel::Warning => write!(f, "warning"),
            IssueLevel::Error => write!(f, "error"),
        }
    }
}

/// Authoring issue found by content validation (non-fatal)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    pub level: IssueLevel,
    /// Where in the catalog, e.g. `step 2 / modality "Por Estricto Puntaje"`
    pub location: String,
    pub message: String,
}

impl ContentIssue {
    pub fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == IssueLevel::Error
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.location, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display() {
        let err = InstructivoError::invalid("no steps");
        assert_eq!(err.to_string(), "Invalid content: no steps");
    }

    #[test]
    fn test_io_display_has_path() {
        let err = InstructivoError::io(
            "content.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("content.toml"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: Result<toml::Value, _> = toml::from_str("= nope");
        let err: InstructivoError = parsed.unwrap_err().into();
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn test_issue_display() {
        let issue = ContentIssue::warning("step 2", "unbalanced `**`");
        assert_eq!(issue.to_string(), "[warning] step 2: unbalanced `**`");
        assert!(!issue.is_error());
        assert!(ContentIssue::error("step 1", "x").is_error());
    }
}
