//! Shared fixtures for the integration suites: an in-memory fetch stub and
//! builders for the site's page shapes.

#![allow(dead_code)]

use std::collections::HashMap;

use cagent::fetch::Fetch;
use cagent::Url;

/// Serves canned pages by exact URL; everything else is a transport failure.
#[derive(Default)]
pub struct StubFetch {
    pages: HashMap<String, String>,
}

impl StubFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: Url, html: impl Into<String>) {
        self.pages.insert(url.to_string(), html.into());
    }
}

impl Fetch for StubFetch {
    fn fetch(&self, url: &Url) -> Option<Vec<u8>> {
        self.pages.get(url.as_str()).map(|html| html.clone().into_bytes())
    }
}

/// Search page with the standard count header and one row per
/// `(event_id, "dd.mm.yyyy", name)` triple. Each row also carries a
/// text-free promotion-logo link, like the real result table.
pub fn search_page(rows: &[(u64, &str, &str)]) -> String {
    let mut html = format!(
        r#"<div class="TableHeaderOff" id="TableHeader">Displaying items 1 to {count} of total {count} items that match the search parameters.</div>
        <table>
        <tr class="THeaderRow"><td>#</td><td>Date</td><td>Event</td></tr>"#,
        count = rows.len()
    );
    for (index, (event_id, date, name)) in rows.iter().enumerate() {
        html.push_str(&format!(
            r#"<tr>
                <td>{row}</td>
                <td>{date}</td>
                <td><a href="?id=8&nr=7"><img src="logo.gif"></a><a href="?id=1&nr={event_id}">{name}</a></td>
            </tr>"#,
            row = index + 1
        ));
    }
    html.push_str("</table>");
    html
}

/// Search page with the literal no-results sentence.
pub fn no_results_page() -> String {
    r#"<div class="TableHeaderOff" id="TableHeader">No items were found that match the search parameters.</div>"#
        .to_string()
}

/// Event detail page from parts: information-box rows (label without the
/// trailing colon, value as raw HTML), match blocks (raw HTML each), and
/// any extra body HTML (rating badges, workers line, comments).
pub fn event_page(info_rows: &[(&str, &str)], match_blocks: &[&str], extra: &str) -> String {
    let mut html = String::from(r#"<html><body><div class="InformationBoxTable">"#);
    for (label, value) in info_rows {
        html.push_str(&format!(
            r#"<div class="InformationBoxTitle">{label}:</div><div class="InformationBoxContents">{value}</div>"#
        ));
    }
    html.push_str("</div>");
    if !match_blocks.is_empty() {
        html.push_str(r#"<div class="Matches">"#);
        for block in match_blocks {
            html.push_str(&format!(r#"<div class="Match">{block}</div>"#));
        }
        html.push_str("</div>");
    }
    html.push_str(extra);
    html.push_str("</body></html>");
    html
}

/// The standard information box used by most fixtures.
pub fn standard_info_rows() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Name of the event", "Wrestle Kingdom 15"),
        ("Date", "04.01.2021"),
        (
            "Promotion",
            r#"<a href="?id=8&nr=7">New Japan Pro Wrestling</a>"#,
        ),
        ("Type", "Pay Per View"),
        ("Location", "Tokyo, Japan"),
        ("Arena", "Tokyo Dome"),
    ]
}

/// One user-comment block.
pub fn comment_block(author: &str, text: &str) -> String {
    format!(
        r#"<div class="Comment">
            <div class="CommentHeader">{author} wrote on 05.01.2021:</div>
            <div class="CommentContents">{text}</div>
        </div>"#
    )
}
