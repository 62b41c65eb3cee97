//! Character encoding detection and transcoding for fetched pages.
//!
//! The remote site serves ISO-8859-1 with the charset declared in a meta
//! tag, so fetched bytes are sniffed and transcoded to UTF-8 before parsing.
//! Invalid sequences are replaced rather than treated as errors.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("CHARSET regex")
});

/// Number of leading bytes examined for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Detect the page encoding from its leading meta tags, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_RE
        .captures(&head_str)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode fetched page bytes to a UTF-8 string.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
