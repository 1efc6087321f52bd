//! Admissions guide content catalog
//!
//! The authored text of the guide (steps, PDF documents, enrollment
//! modalities and notices) lives in a structured content file rather than
//! in code. The default catalog is embedded from `content/instructivo.toml`.
//!
//! ## Example
//!
//! ```rust
//! use instructivo::content::ContentCatalog;
//!
//! let catalog = ContentCatalog::builtin().unwrap();
//! let step = catalog.step(1).unwrap();
//! assert_eq!(step.pdfs.len(), 4);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::formatter::{has_unmatched_bold, FormatOptions, TABLE_CLOSE, TABLE_OPEN};
use crate::utils::error::{ContentIssue, InstructivoError, InstructivoResult};

/// The site's default content, embedded at compile time
pub const BUILTIN_CONTENT: &str = include_str!("../../content/instructivo.toml");

/// A downloadable PDF attached to a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfDocument {
    /// Tab label, e.g. `SEDE NEIVA`
    pub name: String,
    /// Path relative to the site origin
    pub url: String,
}

/// An enrollment modality with formatted body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modality {
    pub name: String,
    /// Lightweight markup, rendered through the formatter
    pub content: String,
}

/// One step of the admissions guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub title: String,
    pub description: String,
    /// Lightweight markup, rendered through the formatter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_info: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pdfs: Vec<PdfDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modalities: Vec<Modality>,
}

impl Step {
    /// PDF at `index`, if any
    pub fn pdf(&self, index: usize) -> Option<&PdfDocument> {
        self.pdfs.get(index)
    }

    /// Modality at `index`, if any
    pub fn modality(&self, index: usize) -> Option<&Modality> {
        self.modalities.get(index)
    }
}

/// Bodies of the standalone notice dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notices {
    /// Terms and conditions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    /// Tuition-free ("gratuidad") policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gratuidad: Option<String>,
}

/// The complete content of the guide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub notices: Notices,
    /// Optional style-class override for formatted blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatOptions>,
}

impl ContentCatalog {
    /// Parse a catalog from TOML text
    pub fn from_toml_str(input: &str) -> InstructivoResult<Self> {
        let catalog: ContentCatalog = toml::from_str(input)?;
        tracing::debug!(steps = catalog.steps.len(), "parsed content catalog");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(input: &str) -> InstructivoResult<Self> {
        let catalog: ContentCatalog = serde_json::from_str(input)?;
        tracing::debug!(steps = catalog.steps.len(), "parsed content catalog");
        Ok(catalog)
    }

    /// Load a catalog from disk
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> InstructivoResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| InstructivoError::io(path, e))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::info!(path = %path.display(), "loading content");
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// The site's default content
    pub fn builtin() -> InstructivoResult<Self> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Look up a step by its number
    pub fn step(&self, number: u32) -> Option<&Step> {
        self.steps.iter().find(|step| step.number == number)
    }

    /// Style classes for this catalog (the `[format]` table, or the defaults)
    pub fn format_options(&self) -> FormatOptions {
        self.format.clone().unwrap_or_default()
    }

    /// Serialize back to JSON (for hosts that consume JSON)
    pub fn to_json_pretty(&self) -> InstructivoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the catalog for authoring mistakes
    ///
    /// Issues never stop rendering; they point at blocks that will render
    /// differently from what the author probably meant.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        if self.steps.is_empty() {
            issues.push(ContentIssue::warning("catalog", "no steps defined"));
        }

        for step in &self.steps {
            let location = format!("step {}", step.number);

            if !seen.insert(step.number) {
                issues.push(ContentIssue::error(&location, "duplicate step number"));
            }
            if step.title.trim().is_empty() {
                issues.push(ContentIssue::error(&location, "empty title"));
            }
            if let Some(ref info) = step.detailed_info {
                check_markup(&format!("{} / detailed_info", location), info, &mut issues);
            }
            for pdf in &step.pdfs {
                if pdf.url.trim().is_empty() {
                    issues.push(ContentIssue::error(
                        format!("{} / pdf \"{}\"", location, pdf.name),
                        "empty url",
                    ));
                }
            }
            for modality in &step.modalities {
                check_markup(
                    &format!("{} / modality \"{}\"", location, modality.name),
                    &modality.content,
                    &mut issues,
                );
            }
        }

        if let Some(ref terms) = self.notices.terms {
            check_markup("notices / terms", terms, &mut issues);
        }
        if let Some(ref gratuidad) = self.notices.gratuidad {
            check_markup("notices / gratuidad", gratuidad, &mut issues);
        }

        issues
    }
}

fn check_markup(location: &str, text: &str, issues: &mut Vec<ContentIssue>) {
    if has_unmatched_bold(text) {
        issues.push(ContentIssue::warning(
            location,
            "unmatched `**` marker renders as literal asterisks",
        ));
    }

    match text.matches(TABLE_OPEN).count() {
        0 => {}
        1 => {
            if !text.contains(TABLE_CLOSE) {
                issues.push(ContentIssue::error(location, "`<table` without `</table>`"));
            }
        }
        n => issues.push(ContentIssue::warning(
            location,
            format!(
                "{} table blocks; only bold runs are formatted when more than one is present",
                n
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ContentCatalog::builtin().unwrap();
        assert_eq!(catalog.title, "instructivo-admisiones");
        assert_eq!(catalog.steps.len(), 5);

        let first = catalog.step(1).unwrap();
        assert_eq!(first.pdfs.len(), 4);
        assert_eq!(first.pdf(1).unwrap().name, "SEDE GARZÓN");

        let modalities = &catalog.step(2).unwrap().modalities;
        assert_eq!(modalities.len(), 4);
        assert!(modalities[0].content.starts_with("Esta modalidad"));
        assert!(modalities[0].content.contains("\n\n**Requisitos**\n• Presentar"));

        let pago = catalog.step(3).unwrap();
        assert_eq!(pago.requirements.len(), 2);
        assert!(pago.detailed_info.is_some());
        assert!(catalog.step(9).is_none());
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let catalog = ContentCatalog::builtin().unwrap();
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        let catalog = ContentCatalog::from_toml_str(
            r#"
            [[steps]]
            number = 1
            title = "Uno"
            description = "d"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.steps[0].title, "Uno");
        assert!(catalog.steps[0].modalities.is_empty());
        assert_eq!(catalog.format_options(), FormatOptions::default());
    }

    #[test]
    fn test_format_override() {
        let catalog = ContentCatalog::from_toml_str(
            r#"
            [format]
            paragraph_class = "prose"
            "#,
        )
        .unwrap();
        let opts = catalog.format_options();
        assert_eq!(opts.paragraph_class, "prose");
        assert_eq!(opts.list_class, FormatOptions::default().list_class);
    }

    #[test]
    fn test_missing_required_field() {
        let result = ContentCatalog::from_toml_str("[[steps]]\nnumber = 1\n");
        assert!(matches!(result, Err(InstructivoError::Toml(_))));
    }

    #[test]
    fn test_json_round_trip_of_builtin() {
        let catalog = ContentCatalog::builtin().unwrap();
        let json = catalog.to_json_pretty().unwrap();
        let back = ContentCatalog::from_json_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_validate_reports_issues() {
        let catalog = ContentCatalog::from_toml_str(
            r#"
            [[steps]]
            number = 1
            title = ""
            description = "d"
            detailed_info = "**abierto"

            [[steps.pdfs]]
            name = "A"
            url = ""

            [[steps]]
            number = 1
            title = "Dos"
            description = "d"

            [notices]
            terms = "<table><tr>"
            gratuidad = "<table></table><table></table>"
            "#,
        )
        .unwrap();

        let issues = catalog.validate();
        let messages: Vec<String> = issues.iter().map(|i| i.to_string()).collect();

        assert_eq!(issues.len(), 6, "{:#?}", messages);
        assert!(messages.iter().any(|m| m.contains("empty title")));
        assert!(messages.iter().any(|m| m.contains("duplicate step number")));
        assert!(messages.iter().any(|m| m.contains("step 1 / pdf \"A\"")));
        assert!(messages
            .iter()
            .any(|m| m.contains("step 1 / detailed_info") && m.contains("`**`")));
        assert!(messages
            .iter()
            .any(|m| m.contains("notices / terms") && m.contains("without")));
        assert!(messages
            .iter()
            .any(|m| m.contains("notices / gratuidad") && m.contains("2 table blocks")));
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 4);
    }
}
