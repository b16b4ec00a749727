//! Result types for extraction output.
//!
//! `MetadataRecord` is the single output of a successful extraction. It is
//! built once by [`assemble`](crate::assemble) and never mutated.

use serde::Serialize;
use url::Url;

/// Descriptive identity of a metadata source, shown to the hosting system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    /// Display name of the source.
    pub name: &'static str,
    /// Maintainer of the source.
    pub author: &'static str,
    /// SemVer version of the source.
    pub version: &'static str,
    /// Website the source reads from.
    pub homepage: &'static str,
}

/// Fields read from the fixed-position gallery markup.
///
/// Produced by [`extract_fields`](crate::metadata::extract_fields).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFields {
    /// Gallery title.
    pub title: String,
    /// Artist names, in markup order.
    pub artists: Vec<String>,
    /// Classification (doujinshi, manga, artist CG, ...).
    pub kind: String,
    /// Content language.
    pub language: String,
    /// Series associations.
    pub series: Vec<String>,
    /// Character associations.
    pub characters: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Catalog metadata for one gallery.
///
/// The page list is never empty and `cover` is always its first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    kind: String,
    language: String,
    title: String,
    artists: Vec<String>,
    series: Vec<String>,
    characters: Vec<String>,
    tags: Vec<String>,
    pages: Vec<Url>,
    cover: Url,
}

impl MetadataRecord {
    /// Caller guarantees `cover == pages[0]`.
    pub(crate) fn new(fields: GalleryFields, pages: Vec<Url>, cover: Url) -> Self {
        let GalleryFields {
            title,
            artists,
            kind,
            language,
            series,
            characters,
            tags,
        } = fields;

        Self {
            kind,
            language,
            title,
            artists,
            series,
            characters,
            tags,
            pages,
            cover,
        }
    }

    /// Classification of the gallery.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Content language.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Gallery title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist names.
    #[must_use]
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    /// Series associations.
    #[must_use]
    pub fn series(&self) -> &[String] {
        &self.series
    }

    /// Character associations.
    #[must_use]
    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    /// Free-form tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Full-size page addresses in reading order.
    #[must_use]
    pub fn pages(&self) -> &[Url] {
        &self.pages
    }

    /// Preview address, the first page.
    #[must_use]
    pub fn cover(&self) -> &Url {
        &self.cover
    }
}
