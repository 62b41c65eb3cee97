//! Error types for cagent.
//!
//! This module defines the error types returned by resolution and
//! metadata-building operations. Transport failures are deliberately not
//! represented here: a failed fetch degrades to "no data" at the call site
//! (see [`crate::fetch::Fetch`]), it never becomes an `Err`.

/// Error type for resolution and metadata-building operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search-result count header matched none of the known templates.
    #[error("unrecognized search result header: {0:?}")]
    ResultHeader(String),

    /// The information box had unequal numbers of title and content nodes.
    #[error("information box shape mismatch: {titles} titles, {contents} contents")]
    InfoBoxShape { titles: usize, contents: usize },

    /// The page carried no information box at all.
    #[error("page has no information box")]
    NoInformationBox,

    /// A field that must be present on this page type was missing.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The event's card has no entry at the requested 1-based ordinal.
    #[error("event {event_id} has no match entry {ordinal}")]
    NoSuchMatch { event_id: u64, ordinal: u32 },

    /// The primary detail page for a build could not be fetched.
    #[error("page could not be fetched: {0}")]
    PageUnavailable(String),

    /// A caller-supplied identifier string did not parse.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}

/// Result type alias for cagent operations.
pub type Result<T> = std::result::Result<T, Error>;
