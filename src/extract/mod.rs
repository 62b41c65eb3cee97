//! Content extraction from fetched page trees.
//!
//! Every function here is a pure function of a parsed document: repeated
//! extraction of the same tree yields identical records. Extraction never
//! touches the network; the resolver and builder feed it pages from
//! [`crate::client::SiteClient`].

pub mod card;
pub mod info_box;
pub mod reviews;
pub mod search_page;

pub use card::{card_entries, participants, roles_for_match, CardEntry};
pub use info_box::{information_box, FieldValue, InformationBox};
pub use reviews::{
    event_rating, match_rating, translate_star_shorthand, user_reviews, SITE_NAME,
};
pub use search_page::{result_count, search_rows};
