//! Release-date parsing and the rolling re-release threshold.
//!
//! The registry emits opening dates both hyphenated (`2018-04-25`) and
//! compact (`20180425`), sometimes blank. Comparing the raw strings across
//! formats misclassifies, so everything is normalized to `NaiveDate` first.

use chrono::{Datelike, NaiveDate};

/// How far back a release date has to lie before a title counts as a
/// re-release (strictly earlier than reference minus this many years).
pub const RE_RELEASE_AGE_YEARS: i32 = 5;

/// Parse a date in either `YYYY-MM-DD` or `YYYYMMDD` form.
///
/// Returns `None` for blank or unparseable input; a missing date is never an
/// error at this layer.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .ok()
}

/// Render a date in the compact `YYYYMMDD` form the registry expects.
pub fn to_compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// The cutoff for re-release classification: `reference` minus
/// [`RE_RELEASE_AGE_YEARS`]. Feb 29 clamps to Feb 28 in non-leap years.
pub fn re_release_threshold(reference: NaiveDate) -> NaiveDate {
    let year = reference.year() - RE_RELEASE_AGE_YEARS;
    reference
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_both_formats_to_the_same_instant() {
        assert_eq!(parse_flexible("2015-01-01"), parse_flexible("20150101"));
        assert_eq!(parse_flexible("2015-01-01"), Some(date(2015, 1, 1)));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_flexible(" 20180425 "), Some(date(2018, 4, 25)));
    }

    #[test]
    fn blank_and_garbage_are_none() {
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible(" "), None);
        assert_eq!(parse_flexible("2018"), None);
        assert_eq!(parse_flexible("not a date"), None);
    }

    #[test]
    fn threshold_is_five_years_back() {
        assert_eq!(re_release_threshold(date(2024, 6, 1)), date(2019, 6, 1));
    }

    #[test]
    fn leap_day_clamps_to_feb_28() {
        assert_eq!(re_release_threshold(date(2024, 2, 29)), date(2019, 2, 28));
    }

    #[test]
    fn compact_round_trip() {
        assert_eq!(to_compact(date(2024, 5, 31)), "20240531");
    }
}
