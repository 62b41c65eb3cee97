//! Candidate resolution: from a parsed intent to a scored candidate list.
//!
//! Per resolution the flow is a short state machine: a date-narrowed search
//! when the intent carries a date hint, one fallback broad search when the
//! narrow search comes back empty, then scoring. Match-mode resolution goes
//! through the matching events' cards instead and never broadens. A failed
//! fetch degrades to zero candidates for that query; only genuinely
//! malformed pages (an unrecognized result header) are errors.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::{info, warn};

use crate::candidate::{ScoredCandidate, SearchCandidate};
use crate::client::SiteClient;
use crate::error::{Error, Result};
use crate::extract;
use crate::fetch::Fetch;
use crate::intent::{self, IntentKind, ParsedName, SearchIntent};
use crate::options::Options;
use crate::scoring;
use crate::urls::{EventView, SearchQuery};

/// Score of every candidate returned by an exact-id lookup.
const DIRECT_SCORE: u8 = 100;

/// Fixed neutral score of ordinal-0 "list all matches" candidates, low
/// enough that the caller must disambiguate manually.
const LIST_ALL_SCORE: u8 = 50;

/// Resolves raw names against the remote event database.
pub struct Resolver<'a> {
    client: SiteClient<'a>,
    options: &'a Options,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetch, options: &'a Options) -> Self {
        Self {
            client: SiteClient::new(fetcher),
            options,
        }
    }

    /// Resolver with a custom client (tests point this at fixture pages).
    #[must_use]
    pub fn with_client(client: SiteClient<'a>, options: &'a Options) -> Self {
        Self { client, options }
    }

    /// Parse a raw name and resolve it to scored candidates, best first.
    pub fn resolve(&self, raw_name: &str) -> Result<Vec<ScoredCandidate>> {
        info!("resolving {raw_name:?}");
        self.resolve_parsed(&intent::parse_raw_name(raw_name))
    }

    /// Resolve an already parsed name.
    pub fn resolve_parsed(&self, parsed: &ParsedName) -> Result<Vec<ScoredCandidate>> {
        let mut scored = match parsed {
            ParsedName::DirectId {
                event_id,
                match_ordinal,
            } => self.resolve_direct(*event_id, *match_ordinal)?,
            ParsedName::Search(intent) => match intent.kind {
                IntentKind::Event => self.resolve_event_intent(intent)?,
                IntentKind::Match => self.resolve_match_intent(intent)?,
            },
        };
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored)
    }

    /// Event mode: one broad or date-narrowed search, scored by the simple
    /// ratio against the promotion+name query string.
    fn resolve_event_intent(&self, intent: &SearchIntent) -> Result<Vec<ScoredCandidate>> {
        let query = intent.query_string();
        let candidates = self.search_with_fallback(&query, intent.date_hint)?;
        Ok(candidates
            .into_iter()
            .map(|candidate| {
                let score = scoring::simple_ratio(&query, &candidate.name);
                ScoredCandidate { candidate, score }
            })
            .collect())
    }

    /// Match mode: resolve the event through the promotion fragment and the
    /// date hint (narrow search only, no broadening), then enumerate every
    /// card entry of the matching events and score against the name
    /// fragment with the set-based scorer.
    fn resolve_match_intent(&self, intent: &SearchIntent) -> Result<Vec<ScoredCandidate>> {
        let event_query = intent.promotion_hint.clone().unwrap_or_default();
        let range = intent.date_hint.map(|day| (day, day));
        let events = self.search_candidates(&SearchQuery {
            name: &event_query,
            range,
        })?;

        let mut accumulated: Vec<SearchCandidate> = Vec::new();
        for event in &events {
            let Ok(event_id) = event.id.parse::<u64>() else {
                continue;
            };
            let Some(page) = self.client.event_page(event_id, EventView::Results) else {
                warn!("could not fetch card of event {event_id}");
                continue;
            };
            let entries = extract::card_entries(&page.doc);
            let matches = entries.iter().enumerate().map(|(index, entry)| {
                #[allow(clippy::cast_possible_truncation)]
                let ordinal = (index + 1) as u32;
                SearchCandidate::match_in_event(
                    event_id,
                    &event.name,
                    &event.year,
                    &event.month,
                    &event.day,
                    ordinal,
                    &entry.text,
                )
            });
            if self.options.keep_all_match_events {
                accumulated.extend(matches);
            } else {
                // Historical behavior: each event's matches replace the
                // previous event's.
                accumulated = matches.collect();
            }
        }

        Ok(accumulated
            .into_iter()
            .map(|candidate| {
                let score = scoring::token_set_ratio(&intent.name_fragment, &candidate.name);
                ScoredCandidate { candidate, score }
            })
            .collect())
    }

    /// Direct lookup: no ordinal resolves the event itself, ordinal `0`
    /// lists every match of the event, a positive ordinal resolves that one
    /// match. Exact lookups score 100, listings 50.
    fn resolve_direct(
        &self,
        event_id: u64,
        match_ordinal: Option<u32>,
    ) -> Result<Vec<ScoredCandidate>> {
        let Some(page) = self.client.event_page(event_id, EventView::Results) else {
            warn!("event {event_id} could not be fetched");
            return Ok(Vec::new());
        };
        let info = match extract::information_box(&page.doc) {
            Ok(info) => info,
            Err(Error::NoInformationBox) => {
                warn!("event {event_id} has no information box; dropping lookup");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        let name = info.text_or_empty(extract::info_box::NAME_KEY);
        if name.is_empty() {
            warn!("event {event_id} has no name field; dropping lookup");
            return Ok(Vec::new());
        }
        let (day, month, year) = split_site_date(info.text_or_empty(extract::info_box::DATE_KEY));

        match match_ordinal {
            None => Ok(vec![ScoredCandidate {
                candidate: SearchCandidate::event(
                    event_id,
                    name.to_string(),
                    year.clone(),
                    month.clone(),
                    day.clone(),
                ),
                score: DIRECT_SCORE,
            }]),
            Some(0) => {
                let entries = extract::card_entries(&page.doc);
                Ok(entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        #[allow(clippy::cast_possible_truncation)]
                        let ordinal = (index + 1) as u32;
                        ScoredCandidate {
                            candidate: SearchCandidate::match_in_event(
                                event_id, name, &year, &month, &day, ordinal, &entry.text,
                            ),
                            score: LIST_ALL_SCORE,
                        }
                    })
                    .collect())
            }
            Some(ordinal) => {
                let entries = extract::card_entries(&page.doc);
                let Some(entry) = entries.get(ordinal as usize - 1) else {
                    warn!("event {event_id} has no match entry {ordinal}");
                    return Ok(Vec::new());
                };
                Ok(vec![ScoredCandidate {
                    candidate: SearchCandidate::match_in_event(
                        event_id, name, &year, &month, &day, ordinal, &entry.text,
                    ),
                    score: DIRECT_SCORE,
                }])
            }
        }
    }

    /// Date-narrowed search first when a hint exists, re-issued without the
    /// date restriction when it returns nothing.
    fn search_with_fallback(
        &self,
        name: &str,
        date_hint: Option<NaiveDate>,
    ) -> Result<Vec<SearchCandidate>> {
        if let Some(day) = date_hint {
            let narrowed = self.search_candidates(&SearchQuery {
                name,
                range: Some((day, day)),
            })?;
            if !narrowed.is_empty() {
                return Ok(narrowed);
            }
            info!("no results on {day}; retrying without date restriction");
        }
        self.search_candidates(&SearchQuery { name, range: None })
    }

    /// One search request: fetch, verify the result-count header, read the
    /// rows, deduplicate by id.
    fn search_candidates(&self, query: &SearchQuery) -> Result<Vec<SearchCandidate>> {
        let Some(page) = self.client.search(query) else {
            warn!("search for {:?} returned nothing", query.name);
            return Ok(Vec::new());
        };
        let count = extract::result_count(&page.doc)?;
        if count.total == 0 {
            info!("no results for {:?}", query.name);
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        Ok(extract::search_rows(&page.doc)
            .into_iter()
            .filter(|candidate| seen.insert(candidate.id.clone()))
            .collect())
    }
}

/// Split a `dd.mm.yyyy` site date into its printed parts, degrading to
/// empty strings so a missing date never fails a lookup.
fn split_site_date(text: &str) -> (String, String, String) {
    let mut parts = text.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year)) => (
            day.trim().to_string(),
            month.trim().to_string(),
            year.trim().to_string(),
        ),
        _ => (String::new(), String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_site_date() {
        assert_eq!(
            split_site_date("04.01.2021"),
            ("04".to_string(), "01".to_string(), "2021".to_string())
        );
        assert_eq!(
            split_site_date("garbage"),
            (String::new(), String::new(), String::new())
        );
    }
}
