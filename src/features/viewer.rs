//! Embedded PDF viewer URLs
//!
//! PDFs are shown through the Google Docs viewer, which needs an absolute
//! URL. Outside a browser there is no origin to resolve against, so the
//! relative path is handed back as is.

/// Google Docs viewer endpoint
pub const GOOGLE_VIEWER_BASE: &str = "https://docs.google.com/viewer";

/// Build the viewer URL for a site-relative PDF path
///
/// # Arguments
/// * `origin` - page origin (`https://host[:port]`), `None` outside a browser
/// * `pdf_url` - path of the PDF relative to the origin
///
/// ```rust
/// use instructivo::viewer::google_viewer_url;
///
/// assert_eq!(
///     google_viewer_url(Some("https://usco.edu.co"), "documents/a.pdf"),
///     "https://docs.google.com/viewer?url=https%3A%2F%2Fusco.edu.co%2Fdocuments%2Fa.pdf&embedded=true"
/// );
/// assert_eq!(google_viewer_url(None, "documents/a.pdf"), "documents/a.pdf");
/// ```
pub fn google_viewer_url(origin: Option<&str>, pdf_url: &str) -> String {
    match origin {
        Some(origin) if !origin.is_empty() => {
            let full_url = absolute_url(origin, pdf_url);
            format!(
                "{}?url={}&embedded=true",
                GOOGLE_VIEWER_BASE,
                urlencoding::encode(&full_url)
            )
        }
        _ => pdf_url.to_string(),
    }
}

/// Join an origin and a site-relative path, never doubling a trailing `/`
/// on the origin
pub fn absolute_url(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_single_slash() {
        assert_eq!(absolute_url("http://x", "a.pdf"), "http://x/a.pdf");
        assert_eq!(absolute_url("http://x/", "a.pdf"), "http://x/a.pdf");
        // The path is joined as authored.
        assert_eq!(absolute_url("http://x", "/a.pdf"), "http://x//a.pdf");
    }

    #[test]
    fn test_viewer_encodes_spaces_and_accents() {
        let url = google_viewer_url(Some("http://localhost:4200"), "documents/SEDE GARZÓN.pdf");
        assert_eq!(
            url,
            "https://docs.google.com/viewer?url=http%3A%2F%2Flocalhost%3A4200%2Fdocuments%2FSEDE%20GARZ%C3%93N.pdf&embedded=true"
        );
    }

    #[test]
    fn test_empty_origin_is_no_browser() {
        assert_eq!(google_viewer_url(Some(""), "a.pdf"), "a.pdf");
    }
}
