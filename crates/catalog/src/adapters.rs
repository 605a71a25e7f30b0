//! Adapters binding the provider traits to the concrete API clients.

mod kobis_adapter;
mod tmdb_adapter;

pub use kobis_adapter::KobisRegistry;
pub use tmdb_adapter::TmdbCatalog;
