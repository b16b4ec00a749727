//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate giving the extractors the three
//! capabilities they need from a parsed page: select the first match, select
//! every match, and read an element's text with whitespace normalized.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// First element in the document matching `selector`.
///
/// The returned selection is empty when nothing matches.
#[inline]
#[must_use]
pub fn query_document<'a>(doc: &'a Document, selector: &str) -> Selection<'a> {
    doc.select(selector).first()
}

/// First descendant of `sel` matching `selector`.
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// All descendants of `sel` matching `selector`, in document order.
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Text Content ===

/// Raw text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. For `<script>` elements this is
/// the unparsed script source.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Collapse whitespace runs to single spaces and trim both ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of `sel` with whitespace collapsed ("sane text").
#[must_use]
pub fn sane_text(sel: &Selection) -> String {
    collapse_whitespace(&text_content(sel))
}

/// Sane text of every descendant of `sel` matching `selector`.
#[must_use]
pub fn sane_texts(sel: &Selection, selector: &str) -> Vec<String> {
    query_selector_all(sel, selector).iter().map(sane_text).collect()
}
