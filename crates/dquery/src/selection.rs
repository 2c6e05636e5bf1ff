// ABOUTME: The Selection snapshot type and its accessors and derivations.
// ABOUTME: Also defines the Filter, Match, and Property parameter types.

//! Ordered, immutable snapshots of matched elements.
//!
//! A [`Selection`] is produced by [`Document::select`](crate::Document::select)
//! or by deriving from another selection (`find`, `filter`, `first`,
//! `last`, `children`). Every derivation returns a fresh snapshot; no
//! selection is ever mutated after construction.
//!
//! Key behaviors:
//! - Accessors that need a first element (`attr`, `has`, `html`, `prop`,
//!   `first`, `last`, `find`, `children`) return
//!   [`QueryError::EmptyResult`] on an empty selection.
//! - `text` concatenates per-element texts with no separator; `texts`
//!   exposes the per-element pieces for any other join policy.
//! - `find` searches the descendants of the first element only.

use std::fmt;
use std::ops::Index;
use std::slice;
use std::str::FromStr;

use scraper::ElementRef;

use crate::compiled;
use crate::error::{QueryError, Result};

/// An ordered, fixed-length snapshot of elements matched by one query.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    elements: Vec<ElementRef<'a>>,
}

/// The test applied by [`Selection::filter`].
pub enum Filter<'t, 'a> {
    /// Keep elements matching a CSS selector.
    Selector(&'t str),
    /// Keep elements for which the predicate returns true.
    Predicate(&'t dyn Fn(&ElementRef<'a>) -> bool),
}

/// The target matched by [`Selection::is`].
#[derive(Debug, Clone, Copy)]
pub enum Match<'t, 'a> {
    /// Does any element match this CSS selector?
    Selector(&'t str),
    /// Is this exact node in the selection?
    Element(ElementRef<'a>),
    /// Is the target selection's first element in this selection?
    Selection(&'t Selection<'a>),
}

/// A named element property, distinct from the attribute namespace.
///
/// Attributes are the serialized string values in the markup; properties
/// are derived fields of the live element. `TagName` and `NodeName` are
/// uppercase and `LocalName` lowercase, matching the engine's case
/// normalization; `Id` and `ClassName` fall back to the empty string
/// when the backing attribute is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    TagName,
    NodeName,
    LocalName,
    Id,
    ClassName,
    TextContent,
    InnerHtml,
    OuterHtml,
}

impl FromStr for Property {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tagName" => Ok(Property::TagName),
            "nodeName" => Ok(Property::NodeName),
            "localName" => Ok(Property::LocalName),
            "id" => Ok(Property::Id),
            "className" => Ok(Property::ClassName),
            "textContent" => Ok(Property::TextContent),
            "innerHTML" => Ok(Property::InnerHtml),
            "outerHTML" => Ok(Property::OuterHtml),
            other => Err(QueryError::Property(other.to_string())),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Property::TagName => "tagName",
            Property::NodeName => "nodeName",
            Property::LocalName => "localName",
            Property::Id => "id",
            Property::ClassName => "className",
            Property::TextContent => "textContent",
            Property::InnerHtml => "innerHTML",
            Property::OuterHtml => "outerHTML",
        };
        write!(f, "{}", s)
    }
}

impl<'a> Selection<'a> {
    pub(crate) fn new(elements: Vec<ElementRef<'a>>) -> Self {
        Self { elements }
    }

    /// Number of matched elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no elements matched.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<ElementRef<'a>> {
        self.elements.get(index).copied()
    }

    /// The matched elements as a slice, in document order.
    pub fn elements(&self) -> &[ElementRef<'a>] {
        &self.elements
    }

    /// Iterates over the matched elements in order.
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// The named attribute of the first element, or `Ok(None)` if the
    /// element does not carry it.
    pub fn attr(&self, key: &str) -> Result<Option<String>> {
        let first = self.require_first("attr")?;
        Ok(first.value().attr(key).map(str::to_string))
    }

    /// Whether the first element carries the named attribute, even with
    /// an empty value.
    pub fn has(&self, key: &str) -> Result<bool> {
        let first = self.require_first("has")?;
        Ok(first.value().attr(key).is_some())
    }

    /// The combined descendant text of every element, in matched order.
    ///
    /// Per-element texts are joined with no separator; use
    /// [`Selection::texts`] for any other join policy.
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    /// The descendant text of each element, one entry per element.
    pub fn texts(&self) -> Vec<String> {
        self.elements
            .iter()
            .map(|el| el.text().collect())
            .collect()
    }

    /// The inner markup of the first element only.
    pub fn html(&self) -> Result<String> {
        Ok(self.require_first("html")?.inner_html())
    }

    /// A new single-element selection over the first matched element.
    pub fn first(&self) -> Result<Selection<'a>> {
        let first = self.require_first("first")?;
        Ok(Selection::new(vec![first]))
    }

    /// A new single-element selection over the last matched element.
    pub fn last(&self) -> Result<Selection<'a>> {
        let last = self
            .elements
            .last()
            .copied()
            .ok_or(QueryError::empty("last"))?;
        Ok(Selection::new(vec![last]))
    }

    /// The named property of the first element.
    pub fn prop(&self, prop: Property) -> Result<String> {
        let first = self.require_first("prop")?;
        let value = match prop {
            Property::TagName | Property::NodeName => first.value().name().to_uppercase(),
            Property::LocalName => first.value().name().to_ascii_lowercase(),
            Property::Id => first.value().attr("id").unwrap_or_default().to_string(),
            Property::ClassName => first.value().attr("class").unwrap_or_default().to_string(),
            Property::TextContent => first.text().collect(),
            Property::InnerHtml => first.inner_html(),
            Property::OuterHtml => first.html(),
        };
        Ok(value)
    }

    /// Set-membership and set-match predicate: true if ANY element in
    /// the selection matches the target.
    ///
    /// A selector target matches if any element satisfies it; an element
    /// target matches if any element is that exact node; a selection
    /// target matches against its FIRST element, and an empty target
    /// selection matches nothing.
    pub fn is(&self, target: Match<'_, 'a>) -> Result<bool> {
        match target {
            Match::Selector(css) => {
                let selector = compiled::compile(css)?;
                Ok(self.elements.iter().any(|el| selector.matches(el)))
            }
            Match::Element(target) => Ok(self.elements.iter().any(|el| el.id() == target.id())),
            Match::Selection(other) => match other.elements.first() {
                Some(first) => Ok(self.elements.iter().any(|el| el.id() == first.id())),
                None => Ok(false),
            },
        }
    }

    /// A new selection keeping only the elements that pass the test,
    /// preserving order. May be empty.
    pub fn filter(&self, test: Filter<'_, 'a>) -> Result<Selection<'a>> {
        let kept = match test {
            Filter::Selector(css) => {
                let selector = compiled::compile(css)?;
                self.elements
                    .iter()
                    .filter(|el| selector.matches(el))
                    .copied()
                    .collect()
            }
            Filter::Predicate(pred) => self
                .elements
                .iter()
                .filter(|el| pred(el))
                .copied()
                .collect(),
        };
        Ok(Selection::new(kept))
    }

    /// Runs a selector over the descendants of the FIRST element only.
    ///
    /// Multi-element selections search within their first element; the
    /// rest of the set does not participate.
    pub fn find(&self, selectors: &str) -> Result<Selection<'a>> {
        let selector = compiled::compile(selectors)?;
        let root = self.require_first("find")?;
        Ok(Selection::new(root.select(&selector).collect()))
    }

    /// The immediate child elements of the first element, in tree order.
    pub fn children(&self) -> Result<Selection<'a>> {
        let root = self.require_first("children")?;
        Ok(Selection::new(
            root.children().filter_map(ElementRef::wrap).collect(),
        ))
    }

    fn require_first(&self, op: &'static str) -> Result<ElementRef<'a>> {
        self.elements.first().copied().ok_or(QueryError::empty(op))
    }
}

/// Selections compare by node identity, element for element.
impl PartialEq for Selection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(a, b)| a.id() == b.id())
    }
}

impl Eq for Selection<'_> {}

impl<'a> Index<usize> for Selection<'a> {
    type Output = ElementRef<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

/// Iterator over the elements of a [`Selection`].
pub struct Iter<'s, 'a> {
    inner: slice::Iter<'s, ElementRef<'a>>,
}

impl<'s, 'a> Iterator for Iter<'s, 'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl<'s, 'a> IntoIterator for &'s Selection<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = Iter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
