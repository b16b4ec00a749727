//! Selector Infrastructure
//!
//! Structural paths to every metadata field of a gallery page. The gallery
//! markup is positional (the info table has no per-row classes), so each field
//! is described once here as a scope plus a target selector, and the
//! extractors walk these descriptions instead of hard-coding offsets.
//!
//! ```text
//! div.gallery
//! ├── h1                        title
//! ├── h2 > li*                  artists
//! └── table
//!     ├── tr[1] a               kind
//!     ├── tr[2] a               language
//!     └── tr[3] li*             series, characters, tags
//! div.gallery-preview > script  thumbnails
//! ```

use std::fmt;

/// Container holding every structured field.
pub const GALLERY_CONTAINER: &str = "div.gallery";

/// Information table inside the gallery container.
pub const INFO_TABLE: &str = "table";

/// Rows of the information table.
pub const INFO_ROW: &str = "tr";

/// Script listing the thumbnails of every page.
pub const PREVIEW_SCRIPT: &str = "div.gallery-preview > script";

/// Field name reported when the page list cannot be located.
pub const PAGES_FIELD: &str = "pages";

/// Metadata field read from the gallery container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artists,
    Kind,
    Language,
    Series,
    Characters,
    Tags,
}

impl Field {
    /// Field name used in errors and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artists => "artists",
            Self::Kind => "kind",
            Self::Language => "language",
            Self::Series => "series",
            Self::Characters => "characters",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element a field's target is searched in, relative to the gallery container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The gallery container itself.
    Gallery,
    /// First descendant of the container matching the selector.
    Element(&'static str),
    /// Row at this index of the information table, counting from 0.
    InfoRow(usize),
}

/// Structural path of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub field: Field,
    pub scope: Scope,
    /// Selector inside the scope. Text fields read the first match, list
    /// fields read every match.
    pub target: &'static str,
}

/// Row 3 carries series, characters and tags as one undifferentiated list;
/// all three fields read the same items.
pub static GALLERY_FIELDS: &[FieldPath] = &[
    FieldPath { field: Field::Title, scope: Scope::Gallery, target: "h1" },
    FieldPath { field: Field::Artists, scope: Scope::Element("h2"), target: "li" },
    FieldPath { field: Field::Kind, scope: Scope::InfoRow(1), target: "a" },
    FieldPath { field: Field::Language, scope: Scope::InfoRow(2), target: "a" },
    FieldPath { field: Field::Series, scope: Scope::InfoRow(3), target: "li" },
    FieldPath { field: Field::Characters, scope: Scope::InfoRow(3), target: "li" },
    FieldPath { field: Field::Tags, scope: Scope::InfoRow(3), target: "li" },
];

/// Path registered for `field`.
#[must_use]
pub fn path_for(field: Field) -> Option<&'static FieldPath> {
    GALLERY_FIELDS.iter().find(|path| path.field == field)
}

/// Human-readable location of a scope, for error messages.
#[must_use]
pub fn describe_scope(scope: Scope) -> String {
    match scope {
        Scope::Gallery => GALLERY_CONTAINER.to_string(),
        Scope::Element(selector) => format!("{GALLERY_CONTAINER} {selector}"),
        Scope::InfoRow(index) => format!("{GALLERY_CONTAINER} {INFO_TABLE} {INFO_ROW}[{index}]"),
    }
}
