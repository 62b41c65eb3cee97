//! Candidate types produced by resolution.
//!
//! Event candidates carry the bare event id; match candidates compose their
//! id as `eventId:ordinal` (1-based) and their display name from the match
//! text, the event name, and the event date. Both compositions live here so
//! the search path and the direct-id path produce byte-identical output for
//! the same inputs.

use serde::Serialize;

/// Whether a candidate identifies a whole event or one match within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CandidateKind {
    Event,
    Match,
}

/// Match-scoped fields of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRef {
    /// Id of the event the match belongs to.
    pub event_id: u64,
    /// Display name of that event.
    pub event_name: String,
    /// 1-based position in the event's card.
    pub ordinal: u32,
}

/// A tentative identification of the user's filename against a remote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCandidate {
    /// `"1000"` for events, `"1000:3"` for matches.
    pub id: String,
    /// Display name shown to the user during disambiguation.
    pub name: String,
    /// Event year as printed on the page; empty when unknown.
    pub year: String,
    /// Event month as printed on the page; empty when unknown.
    pub month: String,
    /// Event day as printed on the page; empty when unknown.
    pub day: String,
    /// Present iff this candidate is a match, not a whole event.
    pub match_ref: Option<MatchRef>,
}

impl SearchCandidate {
    /// Candidate for a whole event.
    #[must_use]
    pub fn event(event_id: u64, name: String, year: String, month: String, day: String) -> Self {
        Self {
            id: event_id.to_string(),
            name,
            year,
            month,
            day,
            match_ref: None,
        }
    }

    /// Candidate for one match within an event's card.
    ///
    /// `ordinal` is 1-based. The display name embeds the match text, the
    /// event name, and the event date so the caller can disambiguate between
    /// events without leaving the candidate list.
    #[must_use]
    pub fn match_in_event(
        event_id: u64,
        event_name: &str,
        year: &str,
        month: &str,
        day: &str,
        ordinal: u32,
        match_text: &str,
    ) -> Self {
        Self {
            id: format!("{event_id}:{ordinal}"),
            name: format!("{match_text} ({event_name}, {day}.{month}.{year})"),
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
            match_ref: Some(MatchRef {
                event_id,
                event_name: event_name.to_string(),
                ordinal,
            }),
        }
    }

    /// Event or match, derived from the match-scoped fields.
    #[must_use]
    pub fn kind(&self) -> CandidateKind {
        if self.match_ref.is_some() {
            CandidateKind::Match
        } else {
            CandidateKind::Event
        }
    }
}

/// A candidate plus its similarity score against the parsed intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub candidate: SearchCandidate,
    /// Integer similarity in `[0, 100]`.
    pub score: u8,
}

/// Parsed `{start, end, total}` of a search-result count header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCount {
    pub start: u32,
    pub end: u32,
    pub total: u32,
}
