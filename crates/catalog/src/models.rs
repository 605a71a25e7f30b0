use chrono::NaiveDate;
use kobis::BoxOfficeEntry;
use serde::{Deserialize, Serialize};
use tmdb::models::Movie;

use crate::dates;

/// A box-office chart entry merged with its best-matching catalog record.
///
/// `catalog` is `None` when neither the year-constrained nor the fallback
/// title search produced a hit; the entry then carries registry fields only
/// and the unmatched state is explicit rather than silently degraded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedMovie {
    pub box_office: BoxOfficeEntry,
    pub catalog: Option<Movie>,
}

impl EnrichedMovie {
    /// Stable identifier: catalog id when matched, registry code otherwise.
    pub fn key(&self) -> String {
        match &self.catalog {
            Some(movie) => movie.id.to_string(),
            None => self.box_office.movie_cd.clone(),
        }
    }

    /// Display title; the catalog one wins when present.
    pub fn title(&self) -> &str {
        self.catalog
            .as_ref()
            .map(|m| m.title.as_str())
            .unwrap_or(&self.box_office.movie_nm)
    }

    /// The registry's opening date, normalized across both wire formats.
    pub fn opening_date(&self) -> Option<NaiveDate> {
        dates::parse_flexible(&self.box_office.open_dt)
    }
}

/// An upcoming listing whose authoritative release date proved historical:
/// the title is coming back, not premiering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingReRelease {
    pub movie: Movie,
    /// The original, historical release date from the detail record.
    pub original_release_date: String,
    /// The upcoming re-release date from the listing.
    pub re_release_date: Option<String>,
}

/// Any record a user can select or favorite, whichever section it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Record {
    Catalog(Movie),
    Enriched(EnrichedMovie),
    UpcomingReRelease(UpcomingReRelease),
}

impl Record {
    pub fn key(&self) -> String {
        match self {
            Record::Catalog(movie) => movie.id.to_string(),
            Record::Enriched(enriched) => enriched.key(),
            Record::UpcomingReRelease(rr) => rr.movie.id.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Catalog(movie) => &movie.title,
            Record::Enriched(enriched) => enriched.title(),
            Record::UpcomingReRelease(rr) => &rr.movie.title,
        }
    }
}

/// Snapshot of a record kept in the favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub key: String,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

impl From<&Movie> for Favorite {
    fn from(movie: &Movie) -> Self {
        Self {
            key: movie.id.to_string(),
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            vote_average: Some(movie.vote_average),
        }
    }
}

impl From<&EnrichedMovie> for Favorite {
    fn from(enriched: &EnrichedMovie) -> Self {
        match &enriched.catalog {
            Some(movie) => {
                let mut favorite = Favorite::from(movie);
                favorite.key = enriched.key();
                favorite
            }
            None => Self {
                key: enriched.key(),
                title: enriched.box_office.movie_nm.clone(),
                poster_path: None,
                release_date: Some(enriched.box_office.open_dt.clone()),
                vote_average: None,
            },
        }
    }
}

impl From<&UpcomingReRelease> for Favorite {
    fn from(rr: &UpcomingReRelease) -> Self {
        let mut favorite = Favorite::from(&rr.movie);
        favorite.release_date = rr.re_release_date.clone();
        favorite
    }
}

impl From<&Record> for Favorite {
    fn from(record: &Record) -> Self {
        match record {
            Record::Catalog(movie) => movie.into(),
            Record::Enriched(enriched) => enriched.into(),
            Record::UpcomingReRelease(rr) => rr.into(),
        }
    }
}
