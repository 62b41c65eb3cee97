//! # cagent
//!
//! Resolves ambiguous, human-authored media filenames for wrestling event
//! and match recordings against the Cagematch event database, then expands
//! a chosen identifier into a structured metadata record (title, date,
//! promotion, participants, rating, summary, reviews).
//!
//! The pipeline has two halves:
//!
//! - **Resolution**: a raw filename is parsed into a typed search intent
//!   (or a direct-identifier shortcut), one or two searches are issued
//!   against the site's full-text search, and the returned candidates are
//!   scored by string similarity. The caller picks one candidate id.
//! - **Building**: the picked id's detail pages are fetched and normalized
//!   into one [`MetadataRecord`].
//!
//! ## Quick start
//!
//! ```no_run
//! use cagent::{resolve, build_metadata, HttpFetch, Options};
//!
//! let fetcher = HttpFetch::new();
//! let options = Options::default();
//!
//! let candidates = resolve("NJPW 2021-01-04 Wrestle Kingdom 15", &fetcher, &options)?;
//! if let Some(best) = candidates.first() {
//!     let record = build_metadata(&best.candidate.id, &fetcher, &options)?;
//!     println!("{}: {}", record.title, record.summary);
//! }
//! # Ok::<(), cagent::Error>(())
//! ```
//!
//! Everything is synchronous and call-scoped: no caching, no shared state
//! beyond the read-only [`Options`], one blocking fetch at a time. Filename
//! shorthand `cm-id:<event>` (optionally `:<match>`; match `0` lists every
//! match of the event) bypasses search entirely.

mod error;
mod options;
mod patterns;

/// Candidate types produced by resolution.
pub mod candidate;

/// Fetch-and-parse client for the remote site.
pub mod client;

/// Calendar-date parsing helpers.
pub mod dates;

/// Thin adapter over dom_query selection operations.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Content extraction from fetched page trees.
pub mod extract;

/// The network transport collaborator.
pub mod fetch;

/// Filename intent parsing.
pub mod intent;

/// Metadata record building.
pub mod metadata;

/// The structured output record types.
pub mod record;

/// Candidate resolution.
pub mod resolve;

/// Candidate similarity scoring.
pub mod scoring;

/// Typed URL construction for the remote database.
pub mod urls;

// Public API - re-exports
pub use url::Url;

pub use candidate::{CandidateKind, MatchRef, ResultCount, ScoredCandidate, SearchCandidate};
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetch};
pub use intent::{parse_raw_name, IntentKind, ParsedName, SearchIntent};
pub use metadata::Builder;
pub use options::{DescriptionType, Options};
pub use record::{MetadataRecord, Review};
pub use resolve::Resolver;

/// Resolve a raw media name to scored candidates, best first.
///
/// Convenience over [`Resolver`]; a failed fetch yields an empty list, a
/// malformed search page an error.
pub fn resolve(
    raw_name: &str,
    fetcher: &dyn Fetch,
    options: &Options,
) -> Result<Vec<ScoredCandidate>> {
    Resolver::new(fetcher, options).resolve(raw_name)
}

/// Build the metadata record for a previously resolved candidate id
/// (`"1000"` for an event, `"1000:3"` for a match).
///
/// Convenience over [`Builder`].
pub fn build_metadata(
    id: &str,
    fetcher: &dyn Fetch,
    options: &Options,
) -> Result<MetadataRecord> {
    Builder::new(fetcher, options).build_from_id(id)
}
