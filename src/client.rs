//! Fetch-and-parse client for the remote site.
//!
//! `SiteClient` names every page view the pipeline touches (search pages,
//! the two event detail views, and deep-dive pages reached through card
//! links) and hands back parsed documents. Transport failures surface as
//! `None`; parse never fails (the DOM crate accepts any input).

use log::debug;
use url::Url;

use crate::dom::{self, Document};
use crate::encoding;
use crate::fetch::Fetch;
use crate::urls::{self, EventView, SearchQuery};

/// A fetched page: the parsed tree plus the URL it came from.
pub struct Page {
    pub doc: Document,
    pub url: Url,
}

/// Client for one site, borrowing the transport collaborator.
pub struct SiteClient<'a> {
    fetcher: &'a dyn Fetch,
    base: Url,
}

impl<'a> SiteClient<'a> {
    /// Client against the production site root.
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetch) -> Self {
        Self::with_base(fetcher, urls::MAIN.clone())
    }

    /// Client against an alternate root; tests point this at fixture URLs.
    #[must_use]
    pub fn with_base(fetcher: &'a dyn Fetch, base: Url) -> Self {
        Self { fetcher, base }
    }

    fn get(&self, url: Url) -> Option<Page> {
        let bytes = self.fetcher.fetch(&url)?;
        debug!("fetched {} bytes from {url}", bytes.len());
        let html = encoding::transcode_to_utf8(&bytes);
        Some(Page {
            doc: dom::parse(&html),
            url,
        })
    }

    /// Event detail page at the given view.
    #[must_use]
    pub fn event_page(&self, event_id: u64, view: EventView) -> Option<Page> {
        self.get(urls::event_url(&self.base, event_id, view))
    }

    /// Search results page for the given query.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Option<Page> {
        self.get(urls::search_url(&self.base, query))
    }

    /// Page behind an href lifted from a fetched page, resolved against the
    /// client's base. Used for deep-dive links in card entries.
    #[must_use]
    pub fn page_at(&self, href: &str) -> Option<Page> {
        match self.base.join(href) {
            Ok(url) => self.get(url),
            Err(err) => {
                log::warn!("unusable href {href:?}: {err}");
                None
            }
        }
    }
}
