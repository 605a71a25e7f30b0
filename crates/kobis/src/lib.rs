mod box_office;
mod client;
mod error;
pub mod models;

pub use client::KobisClient;
pub use error::KobisError;
pub use models::{BoxOfficeEntry, RankOldAndNew};

pub type Result<T> = std::result::Result<T, KobisError>;
