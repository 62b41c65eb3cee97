//! Calendar-date parsing for the shapes this crate meets.
//!
//! The site renders dates as `dd.mm.yyyy`; filenames carry `YYYY MM DD` with
//! space, dash, or dot separators. Both go through a first-match-wins pattern
//! list rather than a single format.

use chrono::NaiveDate;

/// Formats a filename date token may arrive in, tried in order.
const FILENAME_FORMATS: &[&str] = &["%Y-%m-%d", "%Y %m %d", "%Y.%m.%d", "%d.%m.%Y"];

/// Parse a date token from a filename or a site page, whichever shape it has.
///
/// Returns `None` when no known format matches; callers degrade to an absent
/// date hint rather than failing.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    FILENAME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse the site's `dd.mm.yyyy` date cells.
#[must_use]
pub fn parse_site_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d.%m.%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_all_filename_shapes() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 4);
        assert_eq!(parse_date("2021-01-04"), expected);
        assert_eq!(parse_date("2021 01 04"), expected);
        assert_eq!(parse_date("2021.01.04"), expected);
        assert_eq!(parse_date("04.01.2021"), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2021-13-04"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_site_date() {
        assert_eq!(
            parse_site_date("04.01.2021"),
            NaiveDate::from_ymd_opt(2021, 1, 4)
        );
        assert_eq!(parse_site_date("2021-01-04"), None);
    }
}
