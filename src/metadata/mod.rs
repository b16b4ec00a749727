//! Metadata extraction module.
//!
//! Structured fields come from the fixed-position gallery markup; see
//! [`dom_extraction`] for the traversal and [`crate::selector`] for the
//! paths it follows.

pub mod dom_extraction;

pub use dom_extraction::{extract_fields, gallery_container, resolve_scope};
