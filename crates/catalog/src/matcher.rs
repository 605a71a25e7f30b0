use chrono::Datelike;
use kobis::BoxOfficeEntry;
use tmdb::models::Movie;

use crate::{dates, ArchiveError, CatalogProvider};

/// Find the catalog record for a box-office entry.
///
/// The registry and the catalog romanize titles differently and disagree on
/// release windows, so the search is year-constrained first (fewer false
/// positives) and retried unconstrained when that comes back empty (guards
/// against release-year drift between the two sources). The first result of
/// whichever query produced any is taken; `None` when both are empty.
///
/// Transport failures propagate; an empty result set is not an error.
pub async fn match_entry<C>(
    catalog: &C,
    entry: &BoxOfficeEntry,
) -> Result<Option<Movie>, ArchiveError>
where
    C: CatalogProvider + ?Sized,
{
    let year = dates::parse_flexible(&entry.open_dt).map(|d| d.year());

    if let Some(year) = year {
        let results = catalog.search(&entry.movie_nm, Some(year)).await?;
        if let Some(first) = results.into_iter().next() {
            return Ok(Some(first));
        }
        tracing::debug!(
            title = %entry.movie_nm,
            year,
            "no year-constrained match, retrying without year"
        );
    }

    let results = catalog.search(&entry.movie_nm, None).await?;
    Ok(results.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{entry, movie, FakeCatalog};

    #[tokio::test]
    async fn prefers_year_constrained_hit() {
        let mut catalog = FakeCatalog::default();
        catalog.add_search("A", Some(2018), vec![movie(7, "A", Some("2018-01-05"))]);
        catalog.add_search("A", None, vec![movie(99, "A (wrong)", Some("2001-01-01"))]);

        let matched = match_entry(&catalog, &entry("20180001", "A", 1, "20180101"))
            .await
            .unwrap();
        assert_eq!(matched.unwrap().id, 7);
    }

    #[tokio::test]
    async fn falls_back_to_unconstrained_search() {
        let mut catalog = FakeCatalog::default();
        catalog.add_search("A", None, vec![movie(42, "A", Some("2017-12-20"))]);

        let matched = match_entry(&catalog, &entry("20180001", "A", 1, "2018-01-01"))
            .await
            .unwrap();
        assert_eq!(matched.unwrap().id, 42);
    }

    #[tokio::test]
    async fn returns_none_when_both_queries_are_empty() {
        let catalog = FakeCatalog::default();
        let matched = match_entry(&catalog, &entry("20180001", "A", 1, "20180101"))
            .await
            .unwrap();
        assert!(matched.is_none());
    }

    #[tokio::test]
    async fn unparseable_opening_date_skips_the_year_pass() {
        let mut catalog = FakeCatalog::default();
        catalog.add_search("A", None, vec![movie(5, "A", None)]);

        let matched = match_entry(&catalog, &entry("20180001", "A", 1, " "))
            .await
            .unwrap();
        assert_eq!(matched.unwrap().id, 5);
    }
}
