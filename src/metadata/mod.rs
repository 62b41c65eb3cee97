//! Metadata record building.
//!
//! Given a previously resolved identifier, fetch the detail pages and
//! populate a [`MetadataRecord`]. A failed fetch of the primary detail page
//! fails the build; failed sub-fetches (the card view, a deep-dive page)
//! log and leave their fields empty. Missing optional page fields always
//! degrade to their empty form.

mod summary;

use chrono::NaiveDate;
use log::{debug, info, warn};
use url::Url;

use crate::candidate::ScoredCandidate;
use crate::client::{Page, SiteClient};
use crate::dates;
use crate::error::{Error, Result};
use crate::extract::{self, info_box, CardEntry, InformationBox};
use crate::fetch::Fetch;
use crate::options::{DescriptionType, Options};
use crate::record::{MetadataRecord, Review};
use crate::urls::EventView;

/// Promotion placeholder names that mean "no promotion": such records get
/// no studio and no collection memberships.
const FREELANCE_PROMOTIONS: &[&str] = &["Freelance", "Freelance Shows"];

/// Name of the fixed collection matches can be added to.
const MATCHES_COLLECTION: &str = "Matches";

/// Author and source of the curated critic review.
const CURATED_AUTHOR: &str = "Dave Meltzer";
const CURATED_SOURCE: &str = "Wrestling Observer Newsletter";

/// Information-box label of the designated curated rating field on a
/// deep-dive page.
const CURATED_RATING_KEY: &str = "WON Rating";

/// Builds metadata records for resolved identifiers.
pub struct Builder<'a> {
    client: SiteClient<'a>,
    options: &'a Options,
}

impl<'a> Builder<'a> {
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetch, options: &'a Options) -> Self {
        Self {
            client: SiteClient::new(fetcher),
            options,
        }
    }

    /// Builder with a custom client (tests point this at fixture pages).
    #[must_use]
    pub fn with_client(client: SiteClient<'a>, options: &'a Options) -> Self {
        Self { client, options }
    }

    /// Build the record for a candidate id string as handed back by
    /// resolution: `"1000"` for an event, `"1000:3"` for a match.
    pub fn build_from_id(&self, id: &str) -> Result<MetadataRecord> {
        let (event_part, ordinal_part) = match id.split_once(':') {
            Some((event, ordinal)) => (event, Some(ordinal)),
            None => (id, None),
        };
        let event_id = event_part
            .parse()
            .map_err(|_| Error::InvalidId(id.to_string()))?;
        let match_ordinal = match ordinal_part {
            Some(ordinal) => Some(
                ordinal
                    .parse()
                    .map_err(|_| Error::InvalidId(id.to_string()))?,
            ),
            None => None,
        };
        self.build(event_id, match_ordinal)
    }

    /// Convenience over [`Builder::build_from_id`] for a picked candidate.
    pub fn build_for_candidate(&self, picked: &ScoredCandidate) -> Result<MetadataRecord> {
        self.build_from_id(&picked.candidate.id)
    }

    /// Build the record for an event, or for one match of it when
    /// `match_ordinal` is given (1-based).
    pub fn build(&self, event_id: u64, match_ordinal: Option<u32>) -> Result<MetadataRecord> {
        info!("building metadata for event {event_id}, match {match_ordinal:?}");
        let page = self
            .client
            .event_page(event_id, EventView::Results)
            .ok_or_else(|| Error::PageUnavailable(format!("event {event_id}")))?;
        let info = extract::information_box(&page.doc)?;

        match match_ordinal {
            None => self.build_event(event_id, &page, &info),
            Some(ordinal) if ordinal >= 1 => self.build_match(event_id, ordinal, &page, &info),
            Some(_) => Err(Error::NoSuchMatch { event_id, ordinal: 0 }),
        }
    }

    fn build_event(
        &self,
        event_id: u64,
        page: &Page,
        info: &InformationBox,
    ) -> Result<MetadataRecord> {
        let title = required(info, info_box::NAME_KEY)?;
        let mut record = self.common_fields(info, false);
        record.title = title;
        record.rating = extract::event_rating(&page.doc);
        record.roles = extract::participants(&page.doc);
        record.reviews = extract::user_reviews(&page.doc, self.options.review_count, &page.url);

        let results_text = joined_entry_text(&extract::card_entries(&page.doc));
        let card_text = self.card_view_text(event_id);
        let clause = summary::description_clause(
            self.options.description_type,
            &card_text,
            &results_text,
        );
        record.summary = summary::event_summary(info, &clause);
        Ok(record)
    }

    fn build_match(
        &self,
        event_id: u64,
        ordinal: u32,
        page: &Page,
        info: &InformationBox,
    ) -> Result<MetadataRecord> {
        let entries = extract::card_entries(&page.doc);
        let entry = entries
            .get(ordinal as usize - 1)
            .ok_or(Error::NoSuchMatch { event_id, ordinal })?
            .clone();

        let mut record = self.common_fields(info, true);
        record.title = entry.text.clone();
        record.roles =
            extract::roles_for_match(&extract::participants(&page.doc), &entry.text);

        if let Some(deep_dive) = self.deep_dive_page(&entry) {
            record.rating = extract::match_rating(&deep_dive.doc);
            record.reviews = self.match_reviews(&deep_dive.doc, &deep_dive.url);
        }

        let clause = match self.options.description_type {
            DescriptionType::Card => summary::description_clause(
                DescriptionType::Card,
                &self.card_view_text(event_id),
                "",
            ),
            other => summary::description_clause(other, "", &joined_entry_text(&entries)),
        };
        record.summary = summary::match_summary(&entry.text, info, &clause);
        Ok(record)
    }

    /// Fields shared by both record kinds: release date, studio, and the
    /// configuration-driven collections. Freelance placeholder promotions
    /// suppress the studio and every collection membership.
    fn common_fields(&self, info: &InformationBox, is_match: bool) -> MetadataRecord {
        let mut record = MetadataRecord {
            date: release_date(info),
            ..MetadataRecord::default()
        };

        let promotion = info.text_or_empty(info_box::PROMOTION_KEY);
        if promotion.is_empty() || is_freelance(promotion) {
            debug!("promotion {promotion:?} yields no studio and no collections");
            return record;
        }

        record.studio = Some(promotion.to_string());
        let promotion_collection = if is_match {
            self.options.add_matches_to_promotion_collection
        } else {
            self.options.add_events_to_collection
        };
        if promotion_collection {
            record.collections.insert(promotion.to_string());
        }
        if is_match && self.options.add_matches_to_matches_collection {
            record.collections.insert(MATCHES_COLLECTION.to_string());
        }
        record
    }

    /// Curated critic review first when enabled and the designated field is
    /// present, then user comments filling the remaining slots.
    fn match_reviews(&self, doc: &crate::dom::Document, url: &Url) -> Vec<Review> {
        let mut reviews = Vec::new();
        if self.options.enable_curated_review {
            if let Some(curated) = curated_review(doc, url) {
                reviews.push(curated);
            }
        }
        let remaining = self.options.review_count.saturating_sub(reviews.len());
        reviews.extend(extract::user_reviews(doc, remaining, url));
        reviews
    }

    /// Pre-event card text from the alternate page view; empty when the
    /// fetch fails (logged, not fatal).
    fn card_view_text(&self, event_id: u64) -> String {
        match self.client.event_page(event_id, EventView::Card) {
            Some(card_page) => joined_entry_text(&extract::card_entries(&card_page.doc)),
            None => {
                warn!("card view of event {event_id} could not be fetched");
                String::new()
            }
        }
    }

    fn deep_dive_page(&self, entry: &CardEntry) -> Option<Page> {
        let href = entry.link.as_ref()?;
        let page = self.client.page_at(href);
        if page.is_none() {
            warn!("deep-dive page {href:?} could not be fetched");
        }
        page
    }
}

/// Prefer the broadcast date over the primary date when both parse.
fn release_date(info: &InformationBox) -> Option<NaiveDate> {
    dates::parse_site_date(info.text_or_empty(info_box::BROADCAST_DATE_KEY))
        .or_else(|| dates::parse_site_date(info.text_or_empty(info_box::DATE_KEY)))
}

fn required(info: &InformationBox, key: &'static str) -> Result<String> {
    let value = info.text_or_empty(key);
    if value.is_empty() {
        return Err(Error::MissingField(key));
    }
    Ok(value.to_string())
}

fn is_freelance(promotion: &str) -> bool {
    FREELANCE_PROMOTIONS
        .iter()
        .any(|placeholder| placeholder.eq_ignore_ascii_case(promotion))
}

fn joined_entry_text(entries: &[CardEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The curated review exists when the deep-dive page's information box
/// carries the designated rating field; star shorthand renders as glyphs.
fn curated_review(doc: &crate::dom::Document, url: &Url) -> Option<Review> {
    let info = match extract::information_box(doc) {
        Ok(info) => info,
        Err(err) => {
            debug!("deep-dive page has no usable information box: {err}");
            return None;
        }
    };
    let raw = info.text_or_empty(CURATED_RATING_KEY);
    if raw.is_empty() {
        return None;
    }
    Some(Review {
        author: CURATED_AUTHOR.to_string(),
        source: CURATED_SOURCE.to_string(),
        link: Some(url.to_string()),
        text: extract::translate_star_shorthand(raw),
    })
}
