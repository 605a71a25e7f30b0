use std::sync::Arc;

use async_trait::async_trait;
use tmdb::models::{Credits, Movie, MovieDetail, Person, Video};
use tmdb::{SearchMovieParams, TmdbClient};

use crate::{ArchiveError, CatalogProvider, GenreTable};

/// Catalog provider backed by TMDB.
pub struct TmdbCatalog {
    client: Arc<TmdbClient>,
}

impl TmdbCatalog {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogProvider for TmdbCatalog {
    async fn genres(&self) -> Result<GenreTable, ArchiveError> {
        let response = self.client.genre_movie_list().await?;
        Ok(response
            .genres
            .into_iter()
            .map(|g| (g.id, g.name))
            .collect())
    }

    async fn search(&self, title: &str, year: Option<i32>) -> Result<Vec<Movie>, ArchiveError> {
        let mut params = SearchMovieParams::new(title);
        if let Some(year) = year {
            params = params.with_year(year);
        }
        let response = self.client.search_movie(params).await?;
        Ok(response.results)
    }

    async fn upcoming(&self, region: &str) -> Result<Vec<Movie>, ArchiveError> {
        let response = self.client.upcoming(region).await?;
        Ok(response.results)
    }

    async fn movie_detail(&self, id: i64) -> Result<MovieDetail, ArchiveError> {
        Ok(self.client.movie_detail(id).await?)
    }

    async fn movie_videos(&self, id: i64) -> Result<Vec<Video>, ArchiveError> {
        let response = self.client.movie_videos(id).await?;
        Ok(response.results)
    }

    async fn movie_credits(&self, id: i64) -> Result<Credits, ArchiveError> {
        Ok(self.client.movie_credits(id).await?)
    }

    async fn person_detail(&self, id: i64) -> Result<Person, ArchiveError> {
        Ok(self.client.person_detail(id).await?)
    }

    async fn person_movie_credits(&self, id: i64) -> Result<Vec<Movie>, ArchiveError> {
        let response = self.client.person_movie_credits(id).await?;
        Ok(response.cast)
    }
}
