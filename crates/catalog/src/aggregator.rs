use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use kobis::BoxOfficeEntry;
use tmdb::models::Movie;

use crate::classifier;
use crate::models::{EnrichedMovie, UpcomingReRelease};
use crate::{dates, match_entry, ArchiveError, CatalogProvider, GenreTable, RegistryProvider};

/// Concurrency gate for the per-entry catalog searches.
const MATCH_CONCURRENCY: usize = 5;
/// Concurrency gate for the per-entry detail fetches.
const DETAIL_CONCURRENCY: usize = 10;

/// Everything one full load produces: the genre table and the four display
/// sections. Either the whole snapshot exists or the pass failed; partial
/// results are never handed out.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub genres: GenreTable,
    /// Chart entries whose opening date is older than five years.
    pub re_releases: Vec<EnrichedMovie>,
    /// The full enriched chart, rank order preserved.
    pub box_office: Vec<EnrichedMovie>,
    /// Upcoming listings that turned out to be returning titles.
    pub upcoming_re_releases: Vec<UpcomingReRelease>,
    /// The raw upcoming list.
    pub upcoming: Vec<Movie>,
}

/// Orchestrates one full load: genres, yesterday's chart, enrichment,
/// classification, upcoming listings, and upcoming reclassification.
pub struct Aggregator<C, R> {
    catalog: Arc<C>,
    registry: Arc<R>,
    region: String,
}

impl<C, R> Aggregator<C, R>
where
    C: CatalogProvider,
    R: RegistryProvider,
{
    pub fn new(catalog: Arc<C>, registry: Arc<R>, region: impl Into<String>) -> Self {
        Self {
            catalog,
            registry,
            region: region.into(),
        }
    }

    /// Run a full load against today's date.
    pub async fn load(&self) -> Result<Snapshot, ArchiveError> {
        self.load_at(Utc::now().date_naive()).await
    }

    /// Run a full load against an explicit reference date.
    ///
    /// The registry's reporting date is the day before `reference`. Any fetch
    /// failure aborts the remaining steps and surfaces as the single error of
    /// the pass.
    pub async fn load_at(&self, reference: NaiveDate) -> Result<Snapshot, ArchiveError> {
        let genres = self.catalog.genres().await?;
        tracing::info!(genres = genres.len(), "loaded genre table");

        let report_date = reference.pred_opt().unwrap_or(reference);
        let chart = self.registry.daily_box_office(report_date).await?;
        tracing::info!(
            entries = chart.len(),
            date = %report_date,
            "fetched daily box-office chart"
        );

        let box_office = self.enrich_chart(&chart).await?;
        let re_releases = classifier::classify(&box_office, reference).re_releases;
        tracing::info!(
            re_releases = re_releases.len(),
            "classified chart by release-date age"
        );

        let upcoming = self.catalog.upcoming(&self.region).await?;
        let upcoming_re_releases = self.reclassify_upcoming(&upcoming, reference).await?;
        tracing::info!(
            upcoming = upcoming.len(),
            upcoming_re_releases = upcoming_re_releases.len(),
            "checked upcoming listings against authoritative release dates"
        );

        Ok(Snapshot {
            genres,
            re_releases,
            box_office,
            upcoming_re_releases,
            upcoming,
        })
    }

    /// Free-text search, no year hint and no merge step.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, ArchiveError> {
        self.catalog.search(query, None).await
    }

    /// Run the matcher over every chart entry.
    ///
    /// Fan-out is gated and `buffered` so the output keeps the chart's rank
    /// order no matter which search returns first. A zero-match entry keeps
    /// its registry fields; a transport failure aborts the pass.
    async fn enrich_chart(
        &self,
        chart: &[BoxOfficeEntry],
    ) -> Result<Vec<EnrichedMovie>, ArchiveError> {
        let tasks = chart.iter().map(|entry| async move {
            let catalog = match_entry(self.catalog.as_ref(), entry).await?;
            if catalog.is_none() {
                tracing::warn!(
                    title = %entry.movie_nm,
                    "no catalog match, keeping registry fields only"
                );
            }
            Ok(EnrichedMovie {
                box_office: entry.clone(),
                catalog,
            })
        });

        stream::iter(tasks)
            .buffered(MATCH_CONCURRENCY)
            .try_collect()
            .await
    }

    /// Fetch the detail record for every upcoming listing and pull out the
    /// ones whose authoritative release date is older than the threshold.
    async fn reclassify_upcoming(
        &self,
        upcoming: &[Movie],
        reference: NaiveDate,
    ) -> Result<Vec<UpcomingReRelease>, ArchiveError> {
        let threshold = dates::re_release_threshold(reference);

        let tasks = upcoming.iter().map(|movie| async move {
            let detail = self.catalog.movie_detail(movie.id).await?;
            let reclassified = detail
                .release_date
                .filter(|raw| {
                    dates::parse_flexible(raw)
                        .map(|original| original < threshold)
                        .unwrap_or(false)
                })
                .map(|original_release_date| UpcomingReRelease {
                    movie: movie.clone(),
                    original_release_date,
                    re_release_date: movie.release_date.clone(),
                });
            Ok::<_, ArchiveError>(reclassified)
        });

        let checked: Vec<Option<UpcomingReRelease>> = stream::iter(tasks)
            .buffered(DETAIL_CONCURRENCY)
            .try_collect()
            .await?;

        Ok(checked.into_iter().flatten().collect())
    }
}
