//! Metadata building against canned pages.

mod common;

use cagent::client::SiteClient;
use cagent::urls::{event_url, EventView, MAIN};
use cagent::{Builder, DescriptionType, Error, Options};
use chrono::NaiveDate;
use common::{comment_block, event_page, standard_info_rows, StubFetch};

fn builder_with<'a>(fetcher: &'a StubFetch, options: &'a Options) -> Builder<'a> {
    Builder::with_client(SiteClient::new(fetcher), options)
}

fn full_info_rows() -> Vec<(&'static str, &'static str)> {
    let mut rows = standard_info_rows();
    rows.push(("Broadcast type", "Live"));
    rows.push(("Broadcast date", "05.01.2021"));
    rows.push(("TV station/network", "NJPW World"));
    rows.push(("Commentary by", "Kevin Kelly, Rocky Romero"));
    rows
}

const RESULT_BLOCKS: &[&str] = &[
    r#"<a href="?id=111&nr=8034">Singles Match</a> Kota Ibushi defeats Jay White (48:31)"#,
    "Kazuchika Okada defeats Will Ospreay",
];

fn results_extra() -> String {
    format!(
        r#"<span class="Rating">---</span><span class="Rating">9.05</span>
        <div class="Comments Font9">Kota Ibushi, Jay White, Kazuchika Okada, Will Ospreay</div>
        {}{}"#,
        comment_block("PuroFan", "Incredible show."),
        comment_block("Skeptic", "Too long.")
    )
}

fn insert_event_pages(fetcher: &mut StubFetch) {
    fetcher.insert(
        event_url(&MAIN, 1000, EventView::Results),
        event_page(&full_info_rows(), RESULT_BLOCKS, &results_extra()),
    );
    fetcher.insert(
        event_url(&MAIN, 1000, EventView::Card),
        event_page(
            &full_info_rows(),
            &["Kota Ibushi vs. Jay White", "Kazuchika Okada vs. Will Ospreay"],
            "",
        ),
    );
}

#[test]
fn event_record_populates_every_field() {
    let mut fetcher = StubFetch::new();
    insert_event_pages(&mut fetcher);

    let options = Options::default();
    let record = builder_with(&fetcher, &options)
        .build(1000, None)
        .expect("expected Ok(_)");

    assert_eq!(record.title, "Wrestle Kingdom 15");
    // Broadcast date wins over the primary date.
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2021, 1, 5));
    assert_eq!(record.studio.as_deref(), Some("New Japan Pro Wrestling"));
    assert!(record.collections.is_empty());
    assert_eq!(record.rating, Some(9.05));
    assert_eq!(
        record.roles,
        ["Kota Ibushi", "Jay White", "Kazuchika Okada", "Will Ospreay"]
    );
    assert_eq!(record.reviews.len(), 2);
    assert_eq!(record.reviews[0].author, "PuroFan");
    assert_eq!(record.reviews[0].source, "Cagematch");
    assert!(record.summary.contains("Wrestle Kingdom 15 was a Pay Per View event"));
    assert!(record.summary.contains("Broadcast (Live) on NJPW World"));
    assert!(record.summary.contains("Commentary by Kevin Kelly, Rocky Romero."));
    // Default description type appends the results text.
    assert!(record.summary.contains("Results:"));
    assert!(record.summary.contains("Kota Ibushi defeats Jay White (48:31)"));
}

#[test]
fn description_type_selects_card_results_or_nothing() {
    let mut fetcher = StubFetch::new();
    insert_event_pages(&mut fetcher);

    for (description_type, needle, absent) in [
        (DescriptionType::Card, "Card:", "Results:"),
        (DescriptionType::Results, "Results:", "Card:"),
    ] {
        let options = Options {
            description_type,
            ..Options::default()
        };
        let record = builder_with(&fetcher, &options)
            .build(1000, None)
            .expect("expected Ok(_)");
        assert!(record.summary.contains(needle), "missing {needle}");
        assert!(!record.summary.contains(absent), "unexpected {absent}");
    }

    let options = Options {
        description_type: DescriptionType::None,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build(1000, None)
        .expect("expected Ok(_)");
    assert!(!record.summary.contains("Results:"));
    assert!(!record.summary.contains("Card:"));
}

#[test]
fn collection_toggle_adds_the_promotion_collection() {
    let mut fetcher = StubFetch::new();
    insert_event_pages(&mut fetcher);

    let options = Options {
        add_events_to_collection: true,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build(1000, None)
        .expect("expected Ok(_)");
    assert!(record.collections.contains("New Japan Pro Wrestling"));
}

#[test]
fn freelance_promotion_suppresses_studio_and_collections() {
    let mut fetcher = StubFetch::new();
    fetcher.insert(
        event_url(&MAIN, 1000, EventView::Results),
        event_page(
            &[
                ("Name of the event", "Backyard Brawl"),
                ("Date", "04.01.2021"),
                ("Promotion", "Freelance"),
            ],
            &[],
            "",
        ),
    );

    let options = Options {
        add_events_to_collection: true,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build(1000, None)
        .expect("expected Ok(_)");
    assert_eq!(record.studio, None);
    assert!(record.collections.is_empty());
}

#[test]
fn minimal_page_still_builds_a_non_empty_summary() {
    let mut fetcher = StubFetch::new();
    fetcher.insert(
        event_url(&MAIN, 1000, EventView::Results),
        event_page(
            &[("Name of the event", "Mystery Show")],
            &[],
            "",
        ),
    );

    let options = Options::default();
    let record = builder_with(&fetcher, &options)
        .build(1000, None)
        .expect("expected Ok(_)");
    assert_eq!(record.title, "Mystery Show");
    assert_eq!(record.date, None);
    assert_eq!(record.rating, None);
    assert!(record.roles.is_empty());
    assert!(record.reviews.is_empty());
    assert!(!record.summary.is_empty());
    assert!(record.summary.starts_with("Mystery Show was a"));
}

#[test]
fn missing_name_field_drops_the_record() {
    let mut fetcher = StubFetch::new();
    fetcher.insert(
        event_url(&MAIN, 1000, EventView::Results),
        event_page(&[("Date", "04.01.2021")], &[], ""),
    );

    let options = Options::default();
    let result = builder_with(&fetcher, &options).build(1000, None);
    assert!(matches!(result, Err(Error::MissingField(_))));
}

#[test]
fn unfetchable_detail_page_fails_the_build() {
    let fetcher = StubFetch::new();
    let options = Options::default();
    let result = builder_with(&fetcher, &options).build(1000, None);
    assert!(matches!(result, Err(Error::PageUnavailable(_))));
}

fn deep_dive_extra(won_rating: Option<&str>) -> String {
    let info = won_rating.map_or(String::new(), |rating| {
        format!(
            r#"<div class="InformationBoxTable">
                <div class="InformationBoxTitle">WON Rating:</div>
                <div class="InformationBoxContents">{rating}</div>
            </div>"#
        )
    });
    format!(
        r#"{info}<div>Matchguide Rating: 9.37 based on 512 votes</div>
        {}{}"#,
        comment_block("MatchFan", "Best bout of the decade."),
        comment_block("Second", "Close to perfect.")
    )
}

fn insert_match_pages(fetcher: &mut StubFetch, won_rating: Option<&str>) {
    insert_event_pages(fetcher);
    let deep_dive = MAIN.join("?id=111&nr=8034").expect("valid href");
    fetcher.insert(
        deep_dive,
        format!("<html><body>{}</body></html>", deep_dive_extra(won_rating)),
    );
}

#[test]
fn match_record_reads_the_deep_dive_page() {
    let mut fetcher = StubFetch::new();
    insert_match_pages(&mut fetcher, Some("****1/2"));

    let options = Options {
        enable_curated_review: true,
        review_count: 3,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build_from_id("1000:1")
        .expect("expected Ok(_)");

    assert!(record.title.contains("Kota Ibushi defeats Jay White"));
    assert_eq!(record.rating, Some(9.37));
    // Participants are filtered to the names inside this match's card text.
    assert_eq!(record.roles, ["Kota Ibushi", "Jay White"]);
    // Curated review first, translated to glyphs, then user comments.
    assert_eq!(record.reviews.len(), 3);
    assert_eq!(record.reviews[0].author, "Dave Meltzer");
    assert_eq!(record.reviews[0].source, "Wrestling Observer Newsletter");
    assert_eq!(record.reviews[0].text, "★★★★½");
    assert_eq!(record.reviews[1].author, "MatchFan");
    assert!(record.summary.contains(", a match at Wrestle Kingdom 15"));
}

#[test]
fn curated_review_requires_flag_and_designated_field() {
    // Flag disabled: no curated review even though the field is present.
    let mut fetcher = StubFetch::new();
    insert_match_pages(&mut fetcher, Some("****1/2"));
    let options = Options {
        enable_curated_review: false,
        review_count: 3,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build_from_id("1000:1")
        .expect("expected Ok(_)");
    assert!(record.reviews.iter().all(|r| r.author != "Dave Meltzer"));

    // Flag enabled but no designated field: still no curated review.
    let mut fetcher = StubFetch::new();
    insert_match_pages(&mut fetcher, None);
    let options = Options {
        enable_curated_review: true,
        review_count: 3,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build_from_id("1000:1")
        .expect("expected Ok(_)");
    assert!(record.reviews.iter().all(|r| r.author != "Dave Meltzer"));
    assert_eq!(record.reviews[0].author, "MatchFan");
}

#[test]
fn review_cap_counts_the_curated_review() {
    let mut fetcher = StubFetch::new();
    insert_match_pages(&mut fetcher, Some("*****"));
    let options = Options {
        enable_curated_review: true,
        review_count: 2,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build_from_id("1000:1")
        .expect("expected Ok(_)");
    assert_eq!(record.reviews.len(), 2);
    assert_eq!(record.reviews[0].author, "Dave Meltzer");
    assert_eq!(record.reviews[1].author, "MatchFan");
}

#[test]
fn match_without_deep_dive_link_builds_without_rating_or_reviews() {
    let mut fetcher = StubFetch::new();
    insert_event_pages(&mut fetcher);

    let options = Options::default();
    let record = builder_with(&fetcher, &options)
        .build_from_id("1000:2")
        .expect("expected Ok(_)");
    assert!(record.title.contains("Kazuchika Okada defeats Will Ospreay"));
    assert_eq!(record.rating, None);
    assert!(record.reviews.is_empty());
    assert_eq!(record.roles, ["Kazuchika Okada", "Will Ospreay"]);
}

#[test]
fn match_collections_honor_their_own_toggles() {
    let mut fetcher = StubFetch::new();
    insert_event_pages(&mut fetcher);

    let options = Options {
        add_matches_to_promotion_collection: true,
        add_matches_to_matches_collection: true,
        ..Options::default()
    };
    let record = builder_with(&fetcher, &options)
        .build_from_id("1000:2")
        .expect("expected Ok(_)");
    assert!(record.collections.contains("New Japan Pro Wrestling"));
    assert!(record.collections.contains("Matches"));
}

#[test]
fn out_of_range_ordinal_is_a_distinct_error() {
    let mut fetcher = StubFetch::new();
    insert_event_pages(&mut fetcher);

    let options = Options::default();
    let result = builder_with(&fetcher, &options).build(1000, Some(9));
    assert!(matches!(
        result,
        Err(Error::NoSuchMatch {
            event_id: 1000,
            ordinal: 9
        })
    ));
}

#[test]
fn invalid_id_string_is_rejected() {
    let fetcher = StubFetch::new();
    let options = Options::default();
    let builder = builder_with(&fetcher, &options);
    assert!(matches!(
        builder.build_from_id("not-an-id"),
        Err(Error::InvalidId(_))
    ));
    assert!(matches!(
        builder.build_from_id("1000:x"),
        Err(Error::InvalidId(_))
    ));
}
