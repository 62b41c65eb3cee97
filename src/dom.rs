//! Thin adapter over `dom_query` selection operations.
//!
//! Collects the handful of DOM operations the extractors use behind owned
//! return types, so callers never handle tendrils or node references
//! directly.

pub use dom_query::{Document, Selection};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Flattened, trimmed text content of a selection's nodes and their
/// descendants.
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Attribute value of a selection's first node.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|v| v.to_string())
}

/// One `Selection` per matched node, preserving document order.
///
/// `Selection` spans every match at once; per-node work (pairing title and
/// content nodes, walking table rows) needs the nodes individually.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// First matched node as its own selection, if any.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}
