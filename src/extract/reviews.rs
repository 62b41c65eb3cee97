//! Ratings and user reviews.

use url::Url;

use crate::dom::{self, Document};
use crate::patterns::{
    MATCHGUIDE_PREFIX, MATCHGUIDE_SUFFIX, RATING_PLACEHOLDER, WROTE_ON_SEPARATOR,
};
use crate::record::Review;

/// Source attribution for reviews harvested from the site's own comments.
pub const SITE_NAME: &str = "Cagematch";

/// Latest event rating from the rating badges.
///
/// Badges render `---` until enough votes exist; the last non-placeholder
/// value wins. Absent or placeholder-only badges yield no rating.
#[must_use]
pub fn event_rating(doc: &Document) -> Option<f32> {
    dom::each(&doc.select("span.Rating"))
        .iter()
        .filter_map(|badge| {
            let text = dom::text(badge);
            if text == RATING_PLACEHOLDER {
                None
            } else {
                text.parse::<f32>().ok()
            }
        })
        .next_back()
}

/// Rating from the fixed-prefix line on a match deep-dive page.
///
/// The value sits between the literal prefix and `" based on"`; a line that
/// carries the prefix but no parseable value yields no rating.
#[must_use]
pub fn match_rating(doc: &Document) -> Option<f32> {
    let text = dom::text(&doc.select("body"));
    let start = text.find(MATCHGUIDE_PREFIX)? + MATCHGUIDE_PREFIX.len();
    let rest = &text[start..];
    let end = rest.find(MATCHGUIDE_SUFFIX).unwrap_or(rest.len());
    rest[..end].trim().parse().ok()
}

/// Up to `cap` user comments in document order.
///
/// The comment header reads `"{author} wrote on {date}:"`; everything before
/// the separator is the author. Comments without the separator keep their
/// whole header as the author.
#[must_use]
pub fn user_reviews(doc: &Document, cap: usize, source_url: &Url) -> Vec<Review> {
    dom::each(&doc.select("div.Comment"))
        .iter()
        .take(cap)
        .map(|block| {
            let header = dom::text(&block.select("div.CommentHeader"));
            let author = header
                .split(WROTE_ON_SEPARATOR)
                .next()
                .unwrap_or(&header)
                .trim()
                .to_string();
            Review {
                author,
                source: SITE_NAME.to_string(),
                link: Some(source_url.to_string()),
                text: dom::text(&block.select("div.CommentContents")),
            }
        })
        .collect()
}

/// Translate the shorthand star/fraction glyphs of a critic rating to their
/// visual equivalents: `****1/4` becomes `★★★★¼`.
#[must_use]
pub fn translate_star_shorthand(raw: &str) -> String {
    raw.replace("1/4", "¼")
        .replace("1/2", "½")
        .replace("3/4", "¾")
        .replace('*', "★")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls;

    #[test]
    fn test_event_rating_last_non_placeholder_wins() {
        let doc = dom::parse(
            r#"<span class="Rating">8.75</span><span class="Rating">---</span><span class="Rating">9.05</span>"#,
        );
        assert_eq!(event_rating(&doc), Some(9.05));
    }

    #[test]
    fn test_event_rating_placeholder_only_yields_none() {
        let doc = dom::parse(r#"<span class="Rating">---</span>"#);
        assert_eq!(event_rating(&doc), None);
        assert_eq!(event_rating(&dom::parse("<p>no badges</p>")), None);
    }

    #[test]
    fn test_match_rating_between_prefix_and_suffix() {
        let doc = dom::parse(
            "<div>Matchguide Rating: 9.37 based on 512 votes</div>",
        );
        assert_eq!(match_rating(&doc), Some(9.37));
    }

    #[test]
    fn test_match_rating_absent_prefix_yields_none() {
        let doc = dom::parse("<div>Rating: 9.37</div>");
        assert_eq!(match_rating(&doc), None);
    }

    #[test]
    fn test_user_reviews_cap_and_author_split() {
        let doc = dom::parse(
            r#"
            <div class="Comment">
                <div class="CommentHeader">PuroFan wrote on 05.01.2021:</div>
                <div class="CommentContents">Incredible main event.</div>
            </div>
            <div class="Comment">
                <div class="CommentHeader">Anonymous</div>
                <div class="CommentContents">Show of the year.</div>
            </div>
            <div class="Comment">
                <div class="CommentHeader">Third wrote on 06.01.2021:</div>
                <div class="CommentContents">Dropped by the cap.</div>
            </div>
        "#,
        );
        let reviews = user_reviews(&doc, 2, &urls::MAIN);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].author, "PuroFan");
        assert_eq!(reviews[0].text, "Incredible main event.");
        assert_eq!(reviews[0].source, SITE_NAME);
        assert_eq!(reviews[0].link.as_deref(), Some(urls::MAIN_URL));
        assert_eq!(reviews[1].author, "Anonymous");
    }

    #[test]
    fn test_translate_star_shorthand() {
        assert_eq!(translate_star_shorthand("****1/4"), "★★★★¼");
        assert_eq!(translate_star_shorthand("***1/2"), "★★★½");
        assert_eq!(translate_star_shorthand("**3/4"), "★★¾");
        assert_eq!(translate_star_shorthand("5.0"), "5.0");
    }
}
