use chrono::NaiveDate;

use crate::dates;
use crate::models::EnrichedMovie;

/// Result of partitioning a chart by release-date age.
#[derive(Debug, Default)]
pub struct Classified {
    /// Titles whose opening date is strictly older than the threshold.
    pub re_releases: Vec<EnrichedMovie>,
    /// Everything else, including entries with no parseable date.
    pub current: Vec<EnrichedMovie>,
}

/// Partition enriched chart entries into re-releases and current titles.
///
/// A record is a re-release iff its opening date is strictly earlier than
/// `reference` minus five years. Records without a parseable date are
/// current, never an error. Input order is preserved within each bucket.
pub fn classify(entries: &[EnrichedMovie], reference: NaiveDate) -> Classified {
    let threshold = dates::re_release_threshold(reference);
    let mut classified = Classified::default();

    for entry in entries {
        match entry.opening_date() {
            Some(opened) if opened < threshold => classified.re_releases.push(entry.clone()),
            _ => classified.current.push(entry.clone()),
        }
    }

    classified
}
