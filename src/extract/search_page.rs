//! Search page extraction: the result-count header and the result rows.

use crate::candidate::{ResultCount, SearchCandidate};
use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::patterns::{NO_RESULTS_SENTENCE, RESULT_COUNT};
use crate::urls;

/// Parse the fixed-template status line above the results table.
///
/// The literal no-results sentence maps to `{0, 0, 0}`.
///
/// # Errors
///
/// [`Error::ResultHeader`] when the header is missing or matches neither
/// known template; guessing here would corrupt every downstream count.
pub fn result_count(doc: &Document) -> Result<ResultCount> {
    let header = dom::first(&doc.select("div#TableHeader"))
        .ok_or_else(|| Error::ResultHeader("<missing header>".to_string()))?;
    let text = dom::text(&header);

    if text == NO_RESULTS_SENTENCE {
        return Ok(ResultCount {
            start: 0,
            end: 0,
            total: 0,
        });
    }

    let caps = RESULT_COUNT
        .captures(&text)
        .ok_or_else(|| Error::ResultHeader(text.clone()))?;
    let number = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| Error::ResultHeader(text.clone()))
    };
    Ok(ResultCount {
        start: number(1)?,
        end: number(2)?,
        total: number(3)?,
    })
}

/// Extract event candidates from the search-result rows.
///
/// Skips the header row, reads the `dd.mm.yyyy` date cell and the name
/// cell. The name cell can hold both a promotion-logo image link (no text)
/// and the event-name text link; only the link with non-empty display text
/// qualifies. Rows without a qualifying link, a parseable date, or an `nr`
/// id produce no candidate and are dropped silently.
#[must_use]
pub fn search_rows(doc: &Document) -> Vec<SearchCandidate> {
    let Some(table) = dom::first(&doc.select("table")) else {
        return Vec::new();
    };

    dom::each(&table.select("tr"))
        .iter()
        .filter(|row| !is_header_row(row))
        .filter_map(row_candidate)
        .collect()
}

fn is_header_row(row: &Selection) -> bool {
    dom::attr(row, "class").is_some_and(|class| class.contains("THeaderRow"))
}

fn row_candidate(row: &Selection) -> Option<SearchCandidate> {
    let cells = dom::each(&row.select("td"));
    let [_, date_cell, name_cell, ..] = cells.as_slice() else {
        return None;
    };

    let date_text = dom::text(date_cell);
    let mut date_parts = date_text.split('.');
    let (day, month, year) = (date_parts.next()?, date_parts.next()?, date_parts.next()?);

    let link = dom::each(&name_cell.select("a[href]"))
        .into_iter()
        .find(|anchor| !dom::text(anchor).is_empty())?;
    let href = dom::attr(&link, "href")?;
    let event_id = urls::event_id_from_href(&href)?;

    Some(SearchCandidate::event(
        event_id,
        dom::text(&link),
        year.trim().to_string(),
        month.trim().to_string(),
        day.trim().to_string(),
    ))
}
