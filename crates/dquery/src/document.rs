// ABOUTME: Document loading: parses an HTML/XML string once into a queryable handle.
// ABOUTME: Provides load/load_with_mime and the Document type with selector queries.

//! Document loading.
//!
//! [`load`] parses a document string synchronously, once, and returns an
//! owning [`Document`]. The document can then be queried any number of
//! times with different selectors against the same parsed tree. Each
//! `load` call is an independent parse; nothing is cached across calls.
//!
//! HTML parsing is tolerant: the engine error-corrects arbitrary input
//! and always produces a tree. XML input is first scanned for
//! well-formedness, and malformed XML fails the load with
//! [`QueryError::Parse`].

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use scraper::Html;

use crate::compiled;
use crate::error::{QueryError, Result};
use crate::mime::MimeType;
use crate::selection::Selection;

/// Loads a document string as HTML.
///
/// Equivalent to [`load_with_mime`] with [`MimeType::Html`].
pub fn load(content: &str) -> Result<Document> {
    load_with_mime(content, MimeType::Html)
}

/// Loads a document string with an explicit MIME type hint.
///
/// Parses the content immediately and returns a [`Document`] owning the
/// tree. For [`MimeType::Xml`], the content must be well-formed XML.
pub fn load_with_mime(content: &str, mime: MimeType) -> Result<Document> {
    if mime == MimeType::Xml {
        check_well_formed(content)?;
    }
    Ok(Document {
        tree: Html::parse_document(content),
        mime,
    })
}

/// An owning handle over one parsed document tree.
///
/// All selections borrow from the document, so the document must outlive
/// every selection derived from it.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Html,
    mime: MimeType,
}

impl Document {
    /// Runs a CSS selector over the whole document and snapshots the
    /// matches in document order.
    ///
    /// Returns [`QueryError::Selector`] if the engine rejects the
    /// selector string. An empty selection is a valid result.
    pub fn select(&self, selectors: &str) -> Result<Selection<'_>> {
        let selector = compiled::compile(selectors)?;
        Ok(Selection::new(self.tree.select(&selector).collect()))
    }

    /// The MIME type this document was loaded as.
    pub fn mime_type(&self) -> MimeType {
        self.mime
    }

    /// Recoverable errors the engine recorded while parsing.
    ///
    /// Tolerant HTML parsing corrects malformed input instead of failing;
    /// the corrections it made are reported here for diagnostics.
    pub fn parse_errors(&self) -> Vec<String> {
        self.tree.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Scans XML content for well-formedness without building a tree.
///
/// Mismatched end tags, syntax errors, and a missing root element all
/// fail the scan.
fn check_well_formed(content: &str) -> Result<()> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().check_end_names = true;

    let mut saw_root = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) | Ok(Event::Empty(_)) => saw_root = true,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(QueryError::parse(err)),
        }
    }

    if !saw_root {
        return Err(QueryError::Parse("no root element".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_load_is_tolerant() {
        // Unbalanced tags parse fine; the engine error-corrects.
        let doc = load("<div><p>stray").unwrap();
        let sel = doc.select("p").unwrap();
        assert_eq!(sel.text(), "stray");
    }

    #[test]
    fn test_xml_well_formed_loads() {
        let doc = load_with_mime("<root><item id=\"a\">x</item></root>", MimeType::Xml).unwrap();
        assert_eq!(doc.mime_type(), MimeType::Xml);
        let sel = doc.select("item").unwrap();
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.text(), "x");
    }

    #[test]
    fn test_xml_mismatched_end_tag_fails() {
        let err = load_with_mime("<a><b></a>", MimeType::Xml).unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }

    #[test]
    fn test_xml_without_root_fails() {
        let err = load_with_mime("", MimeType::Xml).unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));

        let err = load_with_mime("just text", MimeType::Xml).unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let doc = load("<p>x</p>").unwrap();
        let err = doc.select("[[[invalid").unwrap_err();
        assert!(matches!(err, QueryError::Selector { .. }));
    }
}
