//! Provider traits the pipeline runs against.

use async_trait::async_trait;
use chrono::NaiveDate;
use kobis::BoxOfficeEntry;
use tmdb::models::{Credits, Movie, MovieDetail, Person, Video};

use crate::{ArchiveError, GenreTable};

/// Read-only view of the global movie catalog (Provider A).
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the genre id → name table.
    async fn genres(&self) -> Result<GenreTable, ArchiveError>;

    /// Search movies by title, most relevant first, optionally constrained
    /// to a primary release year.
    async fn search(&self, title: &str, year: Option<i32>) -> Result<Vec<Movie>, ArchiveError>;

    /// Movies with an upcoming release in the given region.
    async fn upcoming(&self, region: &str) -> Result<Vec<Movie>, ArchiveError>;

    /// Full record for one movie, including the authoritative release date.
    async fn movie_detail(&self, id: i64) -> Result<MovieDetail, ArchiveError>;

    async fn movie_videos(&self, id: i64) -> Result<Vec<Video>, ArchiveError>;

    async fn movie_credits(&self, id: i64) -> Result<Credits, ArchiveError>;

    async fn person_detail(&self, id: i64) -> Result<Person, ArchiveError>;

    async fn person_movie_credits(&self, id: i64) -> Result<Vec<Movie>, ArchiveError>;
}

/// Read-only view of the national box-office registry (Provider B).
#[async_trait]
pub trait RegistryProvider: Send + Sync {
    /// The daily chart for a reporting date, rank order preserved.
    async fn daily_box_office(&self, date: NaiveDate) -> Result<Vec<BoxOfficeEntry>, ArchiveError>;
}
