use crate::models::{Credits, Movie, MovieDetail, PaginatedResponse, VideoListResponse};
use crate::TmdbClient;

impl TmdbClient {
    /// List movies with an upcoming release in the given region.
    /// GET /movie/upcoming
    pub async fn upcoming(&self, region: &str) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url("/movie/upcoming");
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", self.api_key()),
                ("language", self.lang.as_str()),
                ("region", region),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the full record for one movie.
    /// GET /movie/{id}
    pub async fn movie_detail(&self, id: i64) -> crate::Result<MovieDetail> {
        let url = self.url(&format!("/movie/{}", id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the videos (trailers, teasers) attached to a movie.
    /// GET /movie/{id}/videos
    pub async fn movie_videos(&self, id: i64) -> crate::Result<VideoListResponse> {
        let url = self.url(&format!("/movie/{}/videos", id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get cast and crew for a movie.
    /// GET /movie/{id}/credits
    pub async fn movie_credits(&self, id: i64) -> crate::Result<Credits> {
        let url = self.url(&format!("/movie/{}/credits", id));
        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", self.api_key()), ("language", self.lang.as_str())])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
