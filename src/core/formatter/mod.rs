//! Lightweight markup → HTML formatter
//!
//! Converts the authored content of the admissions guide into HTML
//! fragments. The dialect is small:
//!
//! - `**text**` renders as a small `<h5>` heading
//! - `• text` renders as an `<li>` item, bullet glyph kept
//! - a blank line splits paragraphs, a single newline becomes `<br>`
//! - one raw `<table>...</table>` block passes through untouched
//!
//! Formatting never fails: unbalanced markers and stray glyphs are left as
//! literal text. The output is meant to be bound directly into the page,
//! so callers must only feed it trusted content.
//!
//! ## Example
//!
//! ```rust
//! use instructivo::format_text;
//!
//! let html = format_text(Some("para one\n\npara two"));
//! assert_eq!(html, r#"<p class="mb-3">para one</p><p class="mb-3">para two</p>"#);
//! ```

pub mod options;
mod table;


pub use options::FormatOptions;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use table::{split_table, TableSplit};

/// Opening marker of a raw table block
pub const TABLE_OPEN: &str = "<table";
/// Closing tag of a raw table block
pub const TABLE_CLOSE: &str = "</table>";

lazy_static! {
    // `**text**`, lazy, never across a line terminator
    static ref BOLD_PATTERN: Regex =
        Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").unwrap();

    // `•` + one whitespace char + the rest of the line. The whitespace set
    // is the browser's (includes U+FEFF, excludes U+0085), not Unicode's.
    static ref BULLET_PATTERN: Regex = Regex::new(
        r"•[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]([^\n\r\x{2028}\x{2029}]*)"
    ).unwrap();
}

/// Format authored markup into HTML with the site's default classes
///
/// Absent or empty input yields an empty string.
pub fn format_text(input: Option<&str>) -> String {
    format_text_with_options(input, &FormatOptions::default())
}

/// Format authored markup into HTML with custom style classes
pub fn format_text_with_options(input: Option<&str>, options: &FormatOptions) -> String {
    let text = match input {
        Some(text) if !text.is_empty() => text,
        _ => return String::new(),
    };

    if text.contains(TABLE_OPEN) {
        format_with_table(text, options)
    } else {
        format_plain(text, options)
    }
}

/// Table bypass: only the text around the table is touched
fn format_with_table(text: &str, options: &FormatOptions) -> String {
    match split_table(text) {
        TableSplit::Single {
            before,
            table,
            after,
        } => {
            let before = replace_bold(before, options);
            // Line breaks are converted after the table only.
            let after = replace_bold(after, options)
                .replace("\n\n", "<br><br>")
                .replace('\n', "<br>");

            let mut result = String::with_capacity(before.len() + table.len() + after.len());
            result.push_str(&before);
            result.push_str(table);
            result.push_str(&after);
            result
        }
        TableSplit::Ambiguous { markers } => {
            tracing::debug!(
                markers,
                "multiple table markers, formatting bold runs only"
            );
            replace_bold(text, options)
        }
    }
}

fn format_plain(text: &str, options: &FormatOptions) -> String {
    let paragraph_open = options.paragraph_open();

    let html = replace_bold(text, options);
    let html = replace_bullets(&html, options);
    let html = html
        .replace("\n\n", &format!("</p>{}", paragraph_open))
        .replace('\n', "<br>");
    let html = format!("{}{}</p>", paragraph_open, html);

    // Boundary cleanup, order matters.
    html.replace(
        &format!("</p>{}<li", paragraph_open),
        &format!("</p>{}<li", options.list_open()),
    )
    .replace("</li></p>", "</li></ul>")
    .replace(&format!("</li>{}<li", paragraph_open), "</li><li")
}

/// `**X**` → heading element
pub(crate) fn replace_bold(text: &str, options: &FormatOptions) -> String {
    let heading_open = options.heading_open();
    BOLD_PATTERN
        .replace_all(text, |caps: &Captures| {
            format!("{}{}</h5>", heading_open, &caps[1])
        })
        .into_owned()
}

/// Whether `text` has a `**` that no bold run consumes
pub(crate) fn has_unmatched_bold(text: &str) -> bool {
    BOLD_PATTERN.replace_all(text, "").contains("**")
}

/// `• rest` → list item, only where the line ends in `\n` or end of input
fn replace_bullets(text: &str, options: &FormatOptions) -> String {
    let item_open = options.list_item_open();
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for caps in BULLET_PATTERN.captures_iter(text) {
        let (Some(whole), Some(rest)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // A carriage return (or unicode line separator) before the newline
        // leaves the bullet unformatted.
        let terminated = text[whole.end()..]
            .chars()
            .next()
            .map_or(true, |c| c == '\n');
        if !terminated {
            continue;
        }

        result.push_str(&text[last..whole.start()]);
        result.push_str(&item_open);
        result.push_str("• ");
        result.push_str(rest.as_str());
        result.push_str("</li>");
        last = whole.end();
    }

    result.push_str(&text[last..]);
    result
}
