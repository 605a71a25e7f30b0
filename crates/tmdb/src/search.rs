use crate::models::{Movie, PaginatedResponse};
use crate::TmdbClient;

#[derive(Debug, Default)]
pub struct SearchMovieParams {
    pub query: String,
    /// Constrain results to a primary release year.
    pub primary_release_year: Option<i32>,
}

impl SearchMovieParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            primary_release_year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.primary_release_year = Some(year);
        self
    }
}

impl TmdbClient {
    /// Search movies by title, most relevant first.
    /// GET /search/movie
    pub async fn search_movie(
        &self,
        params: SearchMovieParams,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url("/search/movie");

        let mut request = self.client().get(&url).query(&[
            ("api_key", self.api_key()),
            ("language", self.lang.as_str()),
            ("query", params.query.as_str()),
        ]);

        if let Some(year) = params.primary_release_year {
            request = request.query(&[("primary_release_year", year.to_string())]);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }
}
