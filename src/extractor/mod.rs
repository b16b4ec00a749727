//! Page list extraction.
//!
//! Gallery pages only render the first thumbnails as markup; the rest are
//! paginated server-side. The preview script, however, carries the complete
//! list, so the page addresses are recovered from it.
//!
//! # Module Structure
//!
//! - `thumbnails`: script scanning, duplicated-extension cleanup and page
//!   address construction

pub mod thumbnails;

use dom_query::Document;
use tracing::debug;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::selector::{PAGES_FIELD, PREVIEW_SCRIPT};
use crate::Options;

pub use thumbnails::{scan, strip_duplicated_extension, ThumbnailToken};

/// Raw source of the preview script.
pub fn preview_script(doc: &Document) -> Result<String> {
    let script = dom::query_document(doc, PREVIEW_SCRIPT);
    if script.is_empty() {
        return Err(Error::missing(PAGES_FIELD, PREVIEW_SCRIPT));
    }
    Ok(dom::text_content(&script).to_string())
}

/// Full-size page addresses of a gallery, in script order.
///
/// An empty list is returned as-is; [`assemble`](crate::assemble)
/// rejects it.
pub fn extract_pages(doc: &Document, opts: &Options) -> Result<Vec<Url>> {
    let script = preview_script(doc)?;
    let pages = scan(&script)
        .iter()
        .map(|token| token.page_url(opts))
        .collect::<Result<Vec<_>>>()?;

    debug!(pages = pages.len(), "extracted page list");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_doc(script: &str) -> Document {
        dom::parse(&format!(
            r#"<html><body>
            <div class="gallery-preview">
                <script type="text/javascript">{script}</script>
            </div>
            </body></html>"#
        ))
    }

    #[test]
    fn test_extract_pages_single_line() {
        let doc = page_doc("\n'//tn.hitomi.la/smalltn/1083230/1.jpg.jpg',\n");
        let pages = extract_pages(&doc, &Options::default()).expect("pages");

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path(), "/galleries/1083230/1.jpg");
        assert_eq!(pages[0].host_str(), Some("aa.hitomi.la"));
        assert_eq!(pages[0].scheme(), "https");
    }

    #[test]
    fn test_extract_pages_keeps_script_order() {
        let lines: Vec<String> = [3, 1, 2, 10]
            .iter()
            .map(|n| format!("'//tn.hitomi.la/smalltn/42/{n}.png.png',"))
            .collect();
        let doc = page_doc(&format!("\nvar thumbnails = [\n{}\n];\n", lines.join("\n")));

        let pages = extract_pages(&doc, &Options::default()).expect("pages");
        let paths: Vec<&str> = pages.iter().map(Url::path).collect();
        assert_eq!(
            paths,
            [
                "/galleries/42/3.png",
                "/galleries/42/1.png",
                "/galleries/42/2.png",
                "/galleries/42/10.png"
            ]
        );
    }

    #[test]
    fn test_extract_pages_no_matches_is_empty() {
        let doc = page_doc("var thumbnails = [];");
        let pages = extract_pages(&doc, &Options::default()).expect("pages");
        assert!(pages.is_empty());
    }

    #[test]
    fn test_extract_pages_missing_script() {
        let doc = dom::parse(r#"<div class="gallery-preview"><p>no script</p></div>"#);
        let err = extract_pages(&doc, &Options::default()).expect_err("no script");
        assert!(matches!(err, Error::StructureMismatch { field: "pages", .. }));
    }

    #[test]
    fn test_script_outside_preview_is_ignored() {
        let doc = dom::parse(
            r#"<script>
'//tn.hitomi.la/smalltn/1/1.jpg.jpg',
</script><div class="gallery-preview"><script>
'//tn.hitomi.la/smalltn/2/5.jpg.jpg',
</script></div>"#,
        );
        let pages = extract_pages(&doc, &Options::default()).expect("pages");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path(), "/galleries/2/5.jpg");
    }
}
