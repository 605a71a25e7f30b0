//! In-memory fakes and fixture builders shared by the pipeline tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use kobis::models::{BoxOfficeEntry, RankOldAndNew};
use tmdb::models::{CastMember, Credits, CrewMember, Movie, MovieDetail, Person, Video};

use crate::models::EnrichedMovie;
use crate::{ArchiveError, CatalogProvider, GenreTable, RegistryProvider};

pub fn movie(id: i64, title: &str, release_date: Option<&str>) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        original_title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: release_date.map(str::to_string),
        vote_average: 7.0,
        genre_ids: Vec::new(),
        popularity: 1.0,
    }
}

pub fn entry(code: &str, name: &str, rank: i64, open_dt: &str) -> BoxOfficeEntry {
    BoxOfficeEntry {
        movie_cd: code.to_string(),
        movie_nm: name.to_string(),
        rank,
        rank_inten: 0,
        rank_old_and_new: RankOldAndNew::Old,
        open_dt: open_dt.to_string(),
        audi_acc: 1_000_000,
        sales_acc: 10_000_000_000,
    }
}

pub fn enriched(box_office: BoxOfficeEntry, catalog: Option<Movie>) -> EnrichedMovie {
    EnrichedMovie {
        box_office,
        catalog,
    }
}

pub fn detail(id: i64, release_date: &str) -> MovieDetail {
    MovieDetail {
        id,
        title: format!("movie-{id}"),
        original_title: format!("movie-{id}"),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        release_date: Some(release_date.to_string()),
        vote_average: 7.0,
        runtime: Some(120),
        genres: Vec::new(),
    }
}

/// Scriptable catalog provider.
#[derive(Default)]
pub struct FakeCatalog {
    pub genre_list: Vec<(i64, String)>,
    search_results: HashMap<(String, Option<i32>), Vec<Movie>>,
    /// Delay per search title, to force out-of-order completion.
    pub search_delay_ms: HashMap<String, u64>,
    pub upcoming: Vec<Movie>,
    pub details: HashMap<i64, MovieDetail>,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub person: Option<Person>,
    pub person_credits: Vec<Movie>,
    fail_upcoming: AtomicBool,
    pub fail_search: bool,
}

impl FakeCatalog {
    pub fn add_search(&mut self, title: &str, year: Option<i32>, results: Vec<Movie>) {
        self.search_results.insert((title.to_string(), year), results);
    }

    pub fn set_fail_upcoming(&self) {
        self.fail_upcoming.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn genres(&self) -> Result<GenreTable, ArchiveError> {
        Ok(self.genre_list.iter().cloned().collect())
    }

    async fn search(&self, title: &str, year: Option<i32>) -> Result<Vec<Movie>, ArchiveError> {
        if self.fail_search {
            return Err(ArchiveError::ProviderUnavailable("search down".to_string()));
        }
        if let Some(delay) = self.search_delay_ms.get(title) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        Ok(self
            .search_results
            .get(&(title.to_string(), year))
            .cloned()
            .unwrap_or_default())
    }

    async fn upcoming(&self, _region: &str) -> Result<Vec<Movie>, ArchiveError> {
        if self.fail_upcoming.load(Ordering::SeqCst) {
            return Err(ArchiveError::ProviderUnavailable(
                "upcoming down".to_string(),
            ));
        }
        Ok(self.upcoming.clone())
    }

    async fn movie_detail(&self, id: i64) -> Result<MovieDetail, ArchiveError> {
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| ArchiveError::ProviderUnavailable(format!("no detail for {id}")))
    }

    async fn movie_videos(&self, _id: i64) -> Result<Vec<Video>, ArchiveError> {
        Ok(self.videos.clone())
    }

    async fn movie_credits(&self, id: i64) -> Result<Credits, ArchiveError> {
        Ok(Credits {
            id,
            cast: self.cast.clone(),
            crew: self.crew.clone(),
        })
    }

    async fn person_detail(&self, id: i64) -> Result<Person, ArchiveError> {
        self.person
            .clone()
            .ok_or_else(|| ArchiveError::ProviderUnavailable(format!("no person {id}")))
    }

    async fn person_movie_credits(&self, _id: i64) -> Result<Vec<Movie>, ArchiveError> {
        Ok(self.person_credits.clone())
    }
}

/// Scriptable registry provider; records the reporting date it was asked for.
#[derive(Default)]
pub struct FakeRegistry {
    pub chart: Vec<BoxOfficeEntry>,
    pub fault: bool,
    pub last_date: Mutex<Option<NaiveDate>>,
}

impl FakeRegistry {
    pub fn with_chart(chart: Vec<BoxOfficeEntry>) -> Self {
        Self {
            chart,
            ..Self::default()
        }
    }

    pub fn faulty() -> Self {
        Self {
            fault: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RegistryProvider for FakeRegistry {
    async fn daily_box_office(&self, date: NaiveDate) -> Result<Vec<BoxOfficeEntry>, ArchiveError> {
        *self.last_date.lock().unwrap() = Some(date);
        if self.fault {
            return Err(ArchiveError::ProviderFault(
                "invalid key (320010)".to_string(),
            ));
        }
        Ok(self.chart.clone())
    }
}
