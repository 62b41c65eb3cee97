//! Configuration options supplied by the host.
//!
//! The host reads its preference store and populates one `Options` value per
//! call; the crate only ever reads it. All fields are public for easy
//! configuration. Use `Default::default()` for standard settings.

/// Which section the summary's trailing clause appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionType {
    /// Append the pre-event card text.
    Card,
    /// Append the post-event results text.
    #[default]
    Results,
    /// Append nothing.
    None,
}

/// Configuration options for resolution and metadata building.
///
/// # Example
///
/// ```rust
/// use cagent::{DescriptionType, Options};
///
/// let options = Options {
///     review_count: 2,
///     description_type: DescriptionType::Card,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Add resolved events to a collection named after their promotion.
    ///
    /// Default: `false`
    pub add_events_to_collection: bool,

    /// Add resolved matches to a collection named after their promotion.
    ///
    /// Default: `false`
    pub add_matches_to_promotion_collection: bool,

    /// Add resolved matches to the fixed "Matches" collection.
    ///
    /// Default: `false`
    pub add_matches_to_matches_collection: bool,

    /// Which section, if any, the summary appends after its template.
    ///
    /// Default: [`DescriptionType::Results`]
    pub description_type: DescriptionType,

    /// Maximum number of reviews to attach to a record.
    ///
    /// Default: `5`
    pub review_count: usize,

    /// Attach the curated critic review to matches when the deep-dive page
    /// carries the designated rating field.
    ///
    /// Default: `false`
    pub enable_curated_review: bool,

    /// In match-mode resolution, keep match candidates from every event the
    /// narrow search returned. `false` reproduces the historical behavior of
    /// keeping only the last-fetched event's matches.
    ///
    /// Default: `true`
    pub keep_all_match_events: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            add_events_to_collection: false,
            add_matches_to_promotion_collection: false,
            add_matches_to_matches_collection: false,
            description_type: DescriptionType::Results,
            review_count: 5,
            enable_curated_review: false,
            keep_all_match_events: true,
        }
    }
}
