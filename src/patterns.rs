//! Compiled regex patterns and literal page templates.
//!
//! All patterns are compiled once at startup using `LazyLock`. The literal
//! sentences and prefixes here mirror the remote site's fixed page templates;
//! extraction code must match them exactly rather than approximate them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Filename parsing
// =============================================================================

/// Manual-override identifier: `cm-id` prefix followed by an event id and an
/// optional match ordinal, separated by `:` or `-`.
pub static DIRECT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cm-id[-:]([0-9]+)(?:[-:]([0-9]+))?$").expect("DIRECT_ID regex")
});

/// The composite filename pattern. One pass distinguishes:
///
/// - an optional promotion prefix, delimited from the date by `" "` or `" - "`;
/// - a date token `YYYY?MM?DD` (separator space, dash, or dot) with month
///   01-12 and day 01-31 validated in-pattern;
/// - an optional match-marker token (`" M "` or `" - M - "`) directly after
///   the date;
/// - a trailing free-text name fragment.
///
/// The no-promotion branch comes first: a filename that opens with a valid
/// date token never donates its leading digits to a promotion prefix. The
/// regex crate's leftmost-first alternation gives that branch priority, which
/// is what the original lookahead-based pattern expressed.
pub static FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    let date = r"\d{4}[ .-](?:0[1-9]|1[0-2])[ .-](?:0[1-9]|[12][0-9]|3[01])";
    let pattern = format!(
        r"^(?:(?P<date_a>{date})(?:(?P<marker_a> - M - | M )| - | )(?P<name_a>.+)|(?P<prom>.+?)(?: - | )(?P<date_b>{date})(?:(?P<marker_b> - M - | M )| - | )(?P<name_b>.+))$"
    );
    Regex::new(&pattern).expect("FILENAME regex")
});

// =============================================================================
// Search-result count header
// =============================================================================

/// Literal sentence the site renders when a search matches nothing.
pub const NO_RESULTS_SENTENCE: &str = "No items were found that match the search parameters.";

/// Fixed-template sentence above a non-empty results table.
pub static RESULT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Displaying items ([0-9]+) to ([0-9]+) of total ([0-9]+) items that match the search parameters\.$",
    )
    .expect("RESULT_COUNT regex")
});

// =============================================================================
// Detail-page literals
// =============================================================================

/// Rating badges render this placeholder until enough votes exist.
pub const RATING_PLACEHOLDER: &str = "---";

/// Fixed prefix of the rating line on a match deep-dive page.
pub const MATCHGUIDE_PREFIX: &str = "Matchguide Rating: ";

/// The rating value ends right before this literal.
pub const MATCHGUIDE_SUFFIX: &str = " based on";

/// Separator between a comment author and the post date in comment headers.
pub const WROTE_ON_SEPARATOR: &str = " wrote on ";
