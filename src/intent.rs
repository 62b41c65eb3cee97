//! Filename intent parsing.
//!
//! Filenames in this domain are semi-structured: users prepend the
//! promotion, a normalized date, and an optional match marker to a free-text
//! title. One composite pattern handles the whole family because date tokens
//! come with three different separators and the promotion prefix is
//! optional, so boundary detection cannot rely on fixed delimiters.

use chrono::NaiveDate;

use crate::dates;
use crate::patterns::{DIRECT_ID, FILENAME};

/// Whether the filename describes a whole event or one match within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Event,
    Match,
}

/// A typed search intent parsed from a raw filename. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIntent {
    pub kind: IntentKind,
    /// Promotion prefix, when the filename carried one.
    pub promotion_hint: Option<String>,
    /// Date token, when the filename carried a valid one.
    pub date_hint: Option<NaiveDate>,
    /// Free-text title; the whole raw string when the pattern did not match.
    pub name_fragment: String,
}

impl SearchIntent {
    /// Effective query string for downstream search: promotion and name
    /// joined when both are present, otherwise the name fragment alone.
    #[must_use]
    pub fn query_string(&self) -> String {
        match &self.promotion_hint {
            Some(promotion) => format!("{promotion} {}", self.name_fragment),
            None => self.name_fragment.clone(),
        }
    }
}

/// Outcome of parsing a raw name: a manual identifier that bypasses search,
/// or a search intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName {
    /// Manual override. `match_ordinal` 0 means "list every match of this
    /// event"; `None` means the event itself.
    DirectId {
        event_id: u64,
        match_ordinal: Option<u32>,
    },
    Search(SearchIntent),
}

/// Parse a raw media name into a direct identifier or a search intent.
///
/// Never fails: input the composite pattern cannot digest becomes an
/// event-kind intent whose name fragment is the full raw string.
#[must_use]
pub fn parse_raw_name(raw: &str) -> ParsedName {
    if let Some(caps) = DIRECT_ID.captures(raw) {
        let event_id = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let ordinal_group = caps.get(2);
        let match_ordinal = ordinal_group.and_then(|m| m.as_str().parse().ok());
        // Overlong numbers fall through to a plain search intent.
        if let Some(event_id) = event_id {
            if ordinal_group.is_none() || match_ordinal.is_some() {
                log::info!("using direct id {event_id} (ordinal {match_ordinal:?})");
                return ParsedName::DirectId {
                    event_id,
                    match_ordinal,
                };
            }
        }
    }

    let Some(caps) = FILENAME.captures(raw) else {
        log::debug!("filename pattern did not match {raw:?}");
        return ParsedName::Search(SearchIntent {
            kind: IntentKind::Event,
            promotion_hint: None,
            date_hint: None,
            name_fragment: raw.to_string(),
        });
    };

    // Branch a matched when the filename opens with the date token; branch b
    // when a promotion prefix came first.
    let group = |a: &str, b: &str| {
        caps.name(a)
            .or_else(|| caps.name(b))
            .map(|m| m.as_str().to_string())
    };
    let date_token = group("date_a", "date_b");
    let marker = group("marker_a", "marker_b");
    let name = group("name_a", "name_b").unwrap_or_default();
    let promotion = caps.name("prom").map(|m| m.as_str().to_string());

    let kind = if marker.is_some() {
        IntentKind::Match
    } else {
        IntentKind::Event
    };
    let date_hint = date_token.as_deref().and_then(dates::parse_date);

    let intent = SearchIntent {
        kind,
        promotion_hint: promotion,
        date_hint,
        name_fragment: name,
    };
    log::debug!("parsed {raw:?} into {intent:?}");
    ParsedName::Search(intent)
}
