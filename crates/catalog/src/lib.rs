//! Core pipeline of the movie archive: merge national box-office rankings
//! with catalog metadata, classify titles into re-release and current
//! sections, and keep a persisted favorites list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐        ┌──────────────────┐
//! │ RegistryProvider │        │ CatalogProvider  │
//! │  (daily chart)   │        │  (search/detail) │
//! └────────┬─────────┘        └────────┬─────────┘
//!          │       matcher / classifier │
//!          └──────────┬────────────────┘
//!                     ▼
//!               Aggregator ──► Snapshot (four sections + genre table)
//!                     │
//!                     ▼
//!                  Session (view state, selection, favorites)
//! ```
//!
//! The concrete providers are thin adapters over the `tmdb` and `kobis`
//! client crates; everything above them runs against the provider traits so
//! the pipeline can be exercised with in-memory fakes.

mod adapters;
mod aggregator;
mod classifier;
mod config;
pub mod dates;
mod detail;
mod error;
mod favorites;
mod genres;
mod matcher;
mod models;
mod provider;
mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use adapters::{KobisRegistry, TmdbCatalog};
pub use aggregator::{Aggregator, Snapshot};
pub use classifier::{classify, Classified};
pub use config::Config;
pub use detail::{movie_extras, person_profile, MovieExtras, PersonProfile};
pub use error::ArchiveError;
pub use favorites::{
    BlobStore, FavoritesError, FavoritesStore, FsBlobStore, MemoryBlobStore, FAVORITES_KEY,
};
pub use genres::GenreTable;
pub use matcher::match_entry;
pub use models::{EnrichedMovie, Favorite, Record, UpcomingReRelease};
pub use provider::{CatalogProvider, RegistryProvider};
pub use session::{LoadPhase, Session, View};
