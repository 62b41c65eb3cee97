//! Typed URL construction for the remote database.
//!
//! Every URL this crate requests is built here, keeping query-parameter
//! encoding in one place. The site routes everything through numeric `id`
//! database selectors (`id=1` events, `id=111` matches) with `nr` carrying
//! the record id.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use url::Url;

/// Site root.
pub const MAIN_URL: &str = "https://www.cagematch.net/";

/// Unranged searches start from the first of January of this year.
pub const FROM_YEAR: i32 = 1887;

/// Database selector of the events table.
const EVENTS_DB: &str = "1";

/// Database selector of the matches table; card-entry links into it lead to
/// a match's deep-dive page.
const MATCHES_DB: &str = "111";

/// Parsed site root, cloned by [`crate::client::SiteClient`].
pub static MAIN: LazyLock<Url> =
    LazyLock::new(|| Url::parse(MAIN_URL).expect("site root url"));

/// The two views of an event detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventView {
    /// Default view: results plus user comments.
    #[default]
    Results,
    /// Alternate view: the pre-event card.
    Card,
}

/// Parameters of one search request.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery<'a> {
    /// Free-text event name, may be empty.
    pub name: &'a str,
    /// Inclusive date range; `None` searches from the epoch year onward.
    pub range: Option<(NaiveDate, NaiveDate)>,
}

/// Event detail page at the given view.
#[must_use]
pub fn event_url(base: &Url, event_id: u64, view: EventView) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("id", EVENTS_DB)
            .append_pair("nr", &event_id.to_string());
        if view == EventView::Card {
            pairs.append_pair("page", "2");
        }
    }
    url
}

/// Event search page for the given query.
#[must_use]
pub fn search_url(base: &Url, query: &SearchQuery) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("id", EVENTS_DB)
            .append_pair("view", "search")
            .append_pair("sEventName", query.name);
        match query.range {
            Some((from, till)) => {
                pairs
                    .append_pair("sDateFromDay", &format!("{:02}", from.day()))
                    .append_pair("sDateFromMonth", &format!("{:02}", from.month()))
                    .append_pair("sDateFromYear", &from.year().to_string())
                    .append_pair("sDateTillDay", &format!("{:02}", till.day()))
                    .append_pair("sDateTillMonth", &format!("{:02}", till.month()))
                    .append_pair("sDateTillYear", &till.year().to_string());
            }
            None => {
                pairs
                    .append_pair("sDateFromDay", "01")
                    .append_pair("sDateFromMonth", "01")
                    .append_pair("sDateFromYear", &FROM_YEAR.to_string());
            }
        }
    }
    url
}

/// Value of one query parameter in a possibly relative href.
#[must_use]
pub fn query_param(href: &str, key: &str) -> Option<String> {
    let query = href.split_once('?').map_or(href, |(_, q)| q);
    let query = query.split('#').next().unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Event id carried in a search-result link's `nr` parameter.
#[must_use]
pub fn event_id_from_href(href: &str) -> Option<u64> {
    query_param(href, "nr")?.parse().ok()
}

/// Whether an href points into the matches database, i.e. at a deep-dive
/// page.
#[must_use]
pub fn is_matchguide_href(href: &str) -> bool {
    query_param(href, "id").as_deref() == Some(MATCHES_DB)
}
