// ABOUTME: Main library entry point for the dquery selection facade.
// ABOUTME: Re-exports the public API: load, Document, Selection, Filter, Match, Property, MimeType, QueryError.

//! dquery - a jQuery-style convenience layer over an HTML/XML DOM engine.
//!
//! This crate parses a document string once and answers CSS-selector
//! queries with immutable [`Selection`] snapshots. All parsing,
//! traversal, and selector matching is delegated to the underlying DOM
//! engine; this crate only shapes the results into a small, ergonomic
//! query surface.
//!
//! # Example
//!
//! ```
//! use dquery::{load, Property};
//!
//! # fn main() -> Result<(), dquery::QueryError> {
//! let doc = load("<h1 id=\"title\">Hello <b>world</b></h1>")?;
//! let heading = doc.select("#title")?;
//! assert_eq!(heading.text(), "Hello world");
//! assert_eq!(heading.attr("id")?.as_deref(), Some("title"));
//! assert_eq!(heading.prop(Property::TagName)?, "H1");
//! assert_eq!(heading.find("b")?.text(), "world");
//! # Ok(())
//! # }
//! ```

pub mod compiled;
pub mod document;
pub mod error;
pub mod mime;
pub mod selection;

pub use crate::compiled::{get_or_compile, precompile_selectors};
pub use crate::document::{load, load_with_mime, Document};
pub use crate::error::{QueryError, Result};
pub use crate::mime::MimeType;
pub use crate::selection::{Filter, Match, Property, Selection};
