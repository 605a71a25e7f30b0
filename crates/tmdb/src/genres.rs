use crate::models::GenreListResponse;
use crate::TmdbClient;

impl TmdbClient {
    /// Get the official list of movie genres.
    /// GET /genre/movie/list
    pub async fn genre_movie_list(&self) -> crate::Result<GenreListResponse> {
        let url = self.url("/genre/movie/list");
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
