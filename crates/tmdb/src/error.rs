#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TMDB API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
}
