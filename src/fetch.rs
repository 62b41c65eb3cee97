//! The network transport collaborator.
//!
//! Transport is an external concern: the resolver and builder only ever see
//! the [`Fetch`] trait. Its contract is strict: page bytes come back only
//! for an HTTP 200 response with an HTML/XML content type; everything else
//! is `None` plus a log line, never an error and never a panic. There is no
//! retry policy; each fetch is attempted exactly once.

use std::io::Read;
use std::time::Duration;

use log::{debug, error};
use url::Url;

/// Upper bound on a fetched body; the site's pages are far smaller.
const MAX_BODY_BYTES: u64 = 8 * 1024 * 1024;

/// Fetches the raw content of a page, or nothing.
pub trait Fetch {
    /// Returns page bytes only on HTTP 200 with an HTML/XML content type.
    fn fetch(&self, url: &Url) -> Option<Vec<u8>>;
}

/// Blocking HTTP implementation of [`Fetch`].
pub struct HttpFetch {
    agent: ureq::Agent,
}

impl HttpFetch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
        }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetch {
    fn fetch(&self, url: &Url) -> Option<Vec<u8>> {
        debug!("requesting {url}");
        let response = match self
            .agent
            .get(url.as_str())
            .set("Accept-Encoding", "identity")
            .call()
        {
            Ok(response) => response,
            Err(err) => {
                error!("error during request to {url}: {err}");
                return None;
            }
        };

        if response.status() != 200 {
            error!("unexpected status {} from {url}", response.status());
            return None;
        }
        let content_type = response.content_type().to_ascii_lowercase();
        if !content_type.contains("html") && !content_type.contains("xml") {
            error!("unexpected content type {content_type:?} from {url}");
            return None;
        }

        let mut body = Vec::new();
        match response
            .into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut body)
        {
            Ok(_) => Some(body),
            Err(err) => {
                error!("error reading body from {url}: {err}");
                None
            }
        }
    }
}
