//! DOM-based Field Extraction
//!
//! Resolves every entry of [`GALLERY_FIELDS`] against a parsed gallery page.
//! The gallery markup is stable, so any missing element means the page is not
//! a gallery (or the site changed) and extraction fails for the whole page.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::result::GalleryFields;
use crate::selector::{
    describe_scope, Field, FieldPath, Scope, GALLERY_CONTAINER, GALLERY_FIELDS, INFO_ROW, INFO_TABLE,
};

/// Destination of a field inside [`GalleryFields`].
enum Slot<'a> {
    Text(&'a mut String),
    List(&'a mut Vec<String>),
}

fn slot(fields: &mut GalleryFields, field: Field) -> Slot<'_> {
    match field {
        Field::Title => Slot::Text(&mut fields.title),
        Field::Kind => Slot::Text(&mut fields.kind),
        Field::Language => Slot::Text(&mut fields.language),
        Field::Artists => Slot::List(&mut fields.artists),
        Field::Series => Slot::List(&mut fields.series),
        Field::Characters => Slot::List(&mut fields.characters),
        Field::Tags => Slot::List(&mut fields.tags),
    }
}

/// Locate the gallery container.
pub fn gallery_container<'a>(doc: &'a Document, field: Field) -> Result<Selection<'a>> {
    let gallery = dom::query_document(doc, GALLERY_CONTAINER);
    if gallery.is_empty() {
        return Err(Error::missing(field.name(), GALLERY_CONTAINER));
    }
    Ok(gallery)
}

/// Locate the element a field path is scoped to.
pub fn resolve_scope<'a>(gallery: &Selection<'a>, path: &FieldPath) -> Result<Selection<'a>> {
    let field = path.field.name();
    match path.scope {
        Scope::Gallery => Ok(gallery.clone()),
        Scope::Element(selector) => {
            let element = dom::query_selector(gallery, selector);
            if element.is_empty() {
                return Err(Error::missing(field, describe_scope(path.scope)));
            }
            Ok(element)
        }
        Scope::InfoRow(index) => {
            let table = dom::query_selector(gallery, INFO_TABLE);
            if table.is_empty() {
                return Err(Error::missing(field, format!("{GALLERY_CONTAINER} {INFO_TABLE}")));
            }
            dom::query_selector_all(&table, INFO_ROW)
                .into_iter()
                .nth(index)
                .ok_or_else(|| Error::missing(field, describe_scope(path.scope)))
        }
    }
}

/// Extract one field into `fields`.
fn apply(gallery: &Selection, path: &FieldPath, fields: &mut GalleryFields) -> Result<()> {
    let scope = resolve_scope(gallery, path)?;
    match slot(fields, path.field) {
        Slot::Text(text) => {
            let target = dom::query_selector(&scope, path.target);
            if target.is_empty() {
                return Err(Error::missing(
                    path.field.name(),
                    format!("{} {}", describe_scope(path.scope), path.target),
                ));
            }
            *text = dom::sane_text(&target);
        }
        Slot::List(items) => *items = dom::sane_texts(&scope, path.target),
    }
    Ok(())
}

/// Extract title, artists, kind, language and the associations of a gallery.
///
/// Fields are resolved in [`GALLERY_FIELDS`] order and the first missing
/// element aborts extraction with [`Error::StructureMismatch`].
///
/// # Example
///
/// ```rust
/// use hitomi_metadata::{dom, metadata::extract_fields};
///
/// let doc = dom::parse(r#"
///     <div class="gallery">
///       <h1> My   Gallery </h1>
///       <h2><ul><li>artist</li></ul></h2>
///       <table>
///         <tr><td>Group</td></tr>
///         <tr><td>Type</td><td><a>manga</a></td></tr>
///         <tr><td>Language</td><td><a>english</a></td></tr>
///         <tr><td>Tags</td><td><ul><li>glasses</li></ul></td></tr>
///       </table>
///     </div>"#);
///
/// let fields = extract_fields(&doc)?;
/// assert_eq!(fields.title, "My Gallery");
/// assert_eq!(fields.tags, ["glasses"]);
/// # Ok::<(), hitomi_metadata::Error>(())
/// ```
pub fn extract_fields(doc: &Document) -> Result<GalleryFields> {
    let gallery = gallery_container(doc, Field::Title)?;
    let mut fields = GalleryFields::default();

    for path in GALLERY_FIELDS {
        apply(&gallery, path, &mut fields)?;
    }

    debug!(
        title = %fields.title,
        artists = fields.artists.len(),
        tags = fields.tags.len(),
        "extracted gallery fields"
    );
    Ok(fields)
}
