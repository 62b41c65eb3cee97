//! The structured metadata record handed back to the host.
//!
//! Built once per resolved identifier; the host persists it, this crate does
//! not. Every optional field degrades to its empty form rather than failing
//! a build.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

/// One review attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Reviewer display name.
    pub author: String,
    /// Where the review comes from (the site's comment section or the
    /// curated critic source).
    pub source: String,
    /// Page the review was read from.
    pub link: Option<String>,
    /// Review body.
    pub text: String,
}

/// Structured metadata for a resolved event or match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataRecord {
    /// Event name, or the match's card-entry text.
    pub title: String,
    /// Release date; the broadcast date when one exists, else the event date.
    pub date: Option<NaiveDate>,
    /// Promotion name; absent for freelance placeholder promotions.
    pub studio: Option<String>,
    /// Collection memberships, driven by the host's collection toggles.
    pub collections: BTreeSet<String>,
    /// Latest non-placeholder rating.
    pub rating: Option<f32>,
    /// Participant names, in page order.
    pub roles: Vec<String>,
    /// Up to the configured cap, curated review first for matches.
    pub reviews: Vec<Review>,
    /// Human-readable summary; never empty for a successfully built record.
    pub summary: String,
}
