//! Candidate similarity scoring.
//!
//! Two scorers, both returning an integer in `[0, 100]`:
//!
//! - [`simple_ratio`] compares whole strings and is used for event search,
//!   where the query and the candidate name have roughly the same shape.
//! - [`token_set_ratio`] compares token *sets* and is used for match search,
//!   where candidate titles are participant-heavy, reorder freely, and carry
//!   extraneous team or stable prefixes the query never mentions.
//!
//! Inputs are preprocessed the same way before either comparison: lowercased,
//! non-alphanumeric characters replaced by spaces, whitespace collapsed.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Lowercase, strip non-alphanumerics to spaces, collapse whitespace.
fn full_process(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

fn ratio_processed(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    clamp_score(normalized_levenshtein(a, b) * 100.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Similarity ratio between two strings, `0..=100`.
///
/// Empty input on either side scores 0, never 100.
#[must_use]
pub fn simple_ratio(a: &str, b: &str) -> u8 {
    ratio_processed(&full_process(a), &full_process(b))
}

/// Set-based token similarity between two strings, `0..=100`.
///
/// Splits both sides into token sets and compares the shared-token core
/// against each side's full token list, taking the best pairwise ratio. A
/// candidate like `"Bullet Club (Jay White & KENTA) vs. CHAOS"` still scores
/// high against `"Jay White KENTA"` because the intersection dominates.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let processed_a = full_process(a);
    let processed_b = full_process(b);
    if processed_a.is_empty() || processed_b.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = processed_a.split(' ').collect();
    let tokens_b: BTreeSet<&str> = processed_b.split(' ').collect();

    let intersection = tokens_a
        .intersection(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let only_a = tokens_a
        .difference(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let only_b = tokens_b
        .difference(&tokens_a)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let combined_a = join_tokens(&intersection, &only_a);
    let combined_b = join_tokens(&intersection, &only_b);

    ratio_processed(&intersection, &combined_a)
        .max(ratio_processed(&intersection, &combined_b))
        .max(ratio_processed(&combined_a, &combined_b))
}

fn join_tokens(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base} {rest}"),
    }
}
