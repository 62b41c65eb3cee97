//! Summary text assembly.
//!
//! Two templates, one per target kind, each followed by a configurable
//! trailing clause. Every substituted field arrives as a plain `&str` that
//! is already `""` when the page omitted it; assembly itself can therefore
//! never fail, even with several optional fields missing at once.

use crate::extract::info_box::{
    ARENA_KEY, BROADCAST_DATE_KEY, BROADCAST_TYPE_KEY, COMMENTARY_KEY, DATE_KEY,
    LOCATION_KEY, NAME_KEY, NETWORK_KEY, PROMOTION_KEY, TYPE_KEY,
};
use crate::extract::InformationBox;
use crate::options::DescriptionType;

/// Summary for a whole event.
#[must_use]
pub fn event_summary(info: &InformationBox, clause: &str) -> String {
    let mut summary = format!(
        "{name} was a {kind} event promoted by {promotion} on {date} at the {arena} in {location}.",
        name = info.text_or_empty(NAME_KEY),
        kind = info.text_or_empty(TYPE_KEY),
        promotion = info.text_or_empty(PROMOTION_KEY),
        date = info.text_or_empty(DATE_KEY),
        arena = info.text_or_empty(ARENA_KEY),
        location = info.text_or_empty(LOCATION_KEY),
    );
    push_broadcast_sentence(&mut summary, info);
    push_commentary_sentence(&mut summary, info);
    summary.push_str(clause);
    summary
}

/// Summary for one match within an event's card.
#[must_use]
pub fn match_summary(match_text: &str, info: &InformationBox, clause: &str) -> String {
    let mut summary = format!(
        "{match_text}, a match at {name}, promoted by {promotion} on {date}.",
        name = info.text_or_empty(NAME_KEY),
        promotion = info.text_or_empty(PROMOTION_KEY),
        date = info.text_or_empty(DATE_KEY),
    );
    push_broadcast_sentence(&mut summary, info);
    summary.push_str(clause);
    summary
}

/// Trailing clause for the configured description type. Empty section text
/// appends nothing.
#[must_use]
pub fn description_clause(
    description_type: DescriptionType,
    card_text: &str,
    results_text: &str,
) -> String {
    let (heading, body) = match description_type {
        DescriptionType::Card => ("Card", card_text),
        DescriptionType::Results => ("Results", results_text),
        DescriptionType::None => return String::new(),
    };
    if body.is_empty() {
        String::new()
    } else {
        format!("\n\n{heading}:\n{body}")
    }
}

fn push_broadcast_sentence(summary: &mut String, info: &InformationBox) {
    let broadcast_type = info.text_or_empty(BROADCAST_TYPE_KEY);
    let broadcast_date = info.text_or_empty(BROADCAST_DATE_KEY);
    let network = info.text_or_empty(NETWORK_KEY);
    if broadcast_type.is_empty() && broadcast_date.is_empty() && network.is_empty() {
        return;
    }
    summary.push_str(&format!(
        " Broadcast ({broadcast_type}) on {network} {broadcast_date}."
    ));
}

fn push_commentary_sentence(summary: &mut String, info: &InformationBox) {
    let commentary = info.text_or_empty(COMMENTARY_KEY);
    if !commentary.is_empty() {
        summary.push_str(&format!(" Commentary by {commentary}."));
    }
}
