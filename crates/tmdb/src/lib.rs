mod client;
mod error;
mod genres;
pub mod models;
mod movies;
mod people;
mod search;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use search::SearchMovieParams;

pub type Result<T> = std::result::Result<T, TmdbError>;
