//! Card and results extraction.
//!
//! The pre-event "card" and the post-event "results" share one shape: an
//! ordered run of per-match text blocks. Which one a page carries depends
//! only on the page view that was fetched, so one extractor serves both.

use crate::dom::{self, Document, Selection};
use crate::urls;

/// One match entry from a card or results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    /// Flattened text of the whole match block.
    pub text: String,
    /// Link into the matches database (the deep-dive page), when present.
    pub link: Option<String>,
}

/// Ordered per-match text blocks from the page's match-list container.
#[must_use]
pub fn card_entries(doc: &Document) -> Vec<CardEntry> {
    let Some(container) = dom::first(&doc.select("div.Matches")) else {
        return Vec::new();
    };
    dom::each(&container.select("div.Match"))
        .iter()
        .map(|entry| CardEntry {
            text: dom::text(entry),
            link: deep_dive_link(entry),
        })
        .collect()
}

/// Card entries mix worker links and one matches-database link; only the
/// latter leads to the deep-dive page.
fn deep_dive_link(entry: &Selection) -> Option<String> {
    dom::each(&entry.select("a[href]"))
        .iter()
        .filter_map(|anchor| dom::attr(anchor, "href"))
        .find(|href| urls::is_matchguide_href(href))
}

/// Split the comma-separated workers line into trimmed participant names.
#[must_use]
pub fn participants(doc: &Document) -> Vec<String> {
    let Some(line) = dom::first(&doc.select("div.Comments.Font9")) else {
        return Vec::new();
    };
    dom::text(&line)
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Best-effort membership filter: keep the names whose text appears inside
/// the match's card-entry text. This is an approximation, not exact roster
/// matching; multi-person entries and ring-name variants can slip through
/// either way.
#[must_use]
pub fn roles_for_match(all: &[String], card_text: &str) -> Vec<String> {
    all.iter()
        .filter(|name| card_text.contains(name.as_str()))
        .cloned()
        .collect()
}
