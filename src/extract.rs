//! Extraction pipeline.
//!
//! Runs both extractors against one parsed page and merges their output into
//! a [`MetadataRecord`]. Everything here is synchronous and works on borrowed
//! input only; the network side lives in [`crate::source`].

use dom_query::Document;
use tracing::info;
use url::Url;

use crate::document::GalleryDocument;
use crate::error::{Error, Result};
use crate::extractor::extract_pages;
use crate::metadata::extract_fields;
use crate::result::{GalleryFields, MetadataRecord};
use crate::Options;

/// Merge extracted fields and pages into a record.
///
/// The cover is the first page. Fails with [`Error::NoPagesFound`] when
/// `pages` is empty.
pub fn assemble(fields: GalleryFields, pages: Vec<Url>) -> Result<MetadataRecord> {
    let cover = pages.first().cloned().ok_or(Error::NoPagesFound)?;
    Ok(MetadataRecord::new(fields, pages, cover))
}

/// Extract a record from an already parsed gallery page.
pub fn extract_tree(tree: &Document, opts: &Options) -> Result<MetadataRecord> {
    let fields = extract_fields(tree)?;
    let pages = extract_pages(tree, opts)?;
    let record = assemble(fields, pages)?;

    info!(
        title = record.title(),
        pages = record.pages().len(),
        "extracted gallery metadata"
    );
    Ok(record)
}

/// Extract a record from a fetched gallery page.
pub fn extract_document(document: &GalleryDocument, opts: &Options) -> Result<MetadataRecord> {
    extract_tree(&document.tree(), opts)
}
