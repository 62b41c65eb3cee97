//! The information box: the key-value metadata panel on a detail page.
//!
//! The page renders the box as parallel runs of title and content divs, so
//! pairing is positional: the n-th title labels the n-th content node. A
//! count mismatch is a parse defect and fails extraction outright rather
//! than silently dropping data.

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};

/// Always-present labels on an event page.
pub const NAME_KEY: &str = "Name of the event";
pub const DATE_KEY: &str = "Date";
pub const PROMOTION_KEY: &str = "Promotion";
pub const TYPE_KEY: &str = "Type";
pub const LOCATION_KEY: &str = "Location";
pub const ARENA_KEY: &str = "Arena";

/// Conditionally-present labels; lookups degrade to the empty string.
pub const BROADCAST_TYPE_KEY: &str = "Broadcast type";
pub const BROADCAST_DATE_KEY: &str = "Broadcast date";
pub const NETWORK_KEY: &str = "TV station/network";
pub const COMMENTARY_KEY: &str = "Commentary by";

/// One information-box value: plain text, optionally carrying the href of
/// the single hyperlink the content node consisted of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    pub link: Option<String>,
}

/// Ordered label → value mapping extracted from one detail page.
///
/// Built fresh per page fetch and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InformationBox {
    fields: Vec<(String, FieldValue)>,
}

impl InformationBox {
    /// Value for an exact label, if the page carried it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value)
    }

    /// Text for a label, degrading to `""` for absent optional fields.
    /// Downstream summary building relies on this never failing.
    #[must_use]
    pub fn text_or_empty(&self, label: &str) -> &str {
        self.get(label).map_or("", |value| value.text.as_str())
    }

    /// Labels and values in page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Extract the information box from a detail page.
///
/// # Errors
///
/// [`Error::NoInformationBox`] when the page has no box container (the id
/// did not resolve to a detail page), [`Error::InfoBoxShape`] when title and
/// content counts disagree.
pub fn information_box(doc: &Document) -> Result<InformationBox> {
    let container = dom::first(&doc.select("div.InformationBoxTable"))
        .ok_or(Error::NoInformationBox)?;

    let titles = dom::each(&container.select("div.InformationBoxTitle"));
    let contents = dom::each(&container.select("div.InformationBoxContents"));
    if titles.len() != contents.len() {
        return Err(Error::InfoBoxShape {
            titles: titles.len(),
            contents: contents.len(),
        });
    }

    let fields = titles
        .iter()
        .zip(contents.iter())
        .map(|(title, content)| {
            let label = dom::text(title).trim_end_matches(':').trim().to_string();
            (label, field_value(content))
        })
        .collect();

    let info = InformationBox { fields };
    log::debug!("parsed information box with {} fields", info.len());
    Ok(info)
}

/// A content node that is a single hyperlink keeps both its display text and
/// its target; anything else flattens to plain text.
fn field_value(content: &Selection) -> FieldValue {
    let anchors = dom::each(&content.select("a"));
    if let [anchor] = anchors.as_slice() {
        let anchor_text = dom::text(anchor);
        if anchor_text == dom::text(content) {
            return FieldValue {
                text: anchor_text,
                link: dom::attr(anchor, "href"),
            };
        }
    }
    FieldValue {
        text: dom::text(content),
        link: None,
    }
}
