//! Favorites persistence: an ordered, deduplicated list of record snapshots
//! round-tripped through a single key of a blob store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::Favorite;

/// The one key under which the favorites list is persisted.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("failed to persist favorites: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal key-value blob persistence.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`; `None` when absent.
    async fn read(&self, key: &str) -> std::io::Result<Option<String>>;

    /// Overwrite the blob under `key`.
    async fn write(&self, key: &str, value: &str) -> std::io::Result<()>;
}

/// Blob store keeping each key as one JSON file under a data directory.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn read(&self, key: &str) -> std::io::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write(&self, key: &str, value: &str) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.path(key), value).await
    }
}

/// In-memory blob store for tests and embedding. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing the favorites API.
    pub async fn seed(&self, key: &str, value: &str) {
        self.blobs
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn read(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> std::io::Result<()> {
        self.blobs
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The in-memory favorites list plus its backing store.
///
/// Loading never errors: an absent, unreadable, or non-list blob downgrades
/// to an empty list. Every mutation rewrites the whole blob.
pub struct FavoritesStore<S> {
    store: S,
    favorites: Vec<Favorite>,
}

impl<S: BlobStore> FavoritesStore<S> {
    /// Restore the favorites list from the store.
    pub async fn load(store: S) -> Self {
        let favorites = match store.read(FAVORITES_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Favorite>>(&blob) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!("favorites blob is malformed, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("favorites blob is unreadable, starting empty: {e}");
                Vec::new()
            }
        };
        Self { store, favorites }
    }

    pub fn all(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.iter().any(|f| f.key == key)
    }

    /// Append a favorite unless its key is already present.
    pub async fn add(&mut self, favorite: Favorite) -> Result<(), FavoritesError> {
        if self.is_favorite(&favorite.key) {
            return Ok(());
        }
        self.favorites.push(favorite);
        self.persist().await
    }

    /// Drop the favorite with the given key, if any.
    pub async fn remove(&mut self, key: &str) -> Result<(), FavoritesError> {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.key != key);
        if self.favorites.len() == before {
            return Ok(());
        }
        self.persist().await
    }

    async fn persist(&self) -> Result<(), FavoritesError> {
        let blob = serde_json::to_string(&self.favorites)?;
        self.store.write(FAVORITES_KEY, &blob).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::movie;

    fn favorite(id: i64, title: &str) -> Favorite {
        Favorite::from(&movie(id, title, Some("2018-01-05")))
    }

    #[tokio::test]
    async fn round_trips_through_the_store() {
        let store = MemoryBlobStore::new();
        {
            let mut favorites = FavoritesStore::load(store.clone()).await;
            favorites.add(favorite(7, "A")).await.unwrap();
        }
        // Fresh load simulates a new session over the same blob.
        let favorites = FavoritesStore::load(store.clone()).await;
        assert!(favorites.is_favorite("7"));
        assert_eq!(favorites.all().len(), 1);
    }

    #[tokio::test]
    async fn remove_persists_too() {
        let store = MemoryBlobStore::new();
        {
            let mut favorites = FavoritesStore::load(store.clone()).await;
            favorites.add(favorite(7, "A")).await.unwrap();
            favorites.remove("7").await.unwrap();
        }
        let favorites = FavoritesStore::load(store.clone()).await;
        assert!(!favorites.is_favorite("7"));
        assert!(favorites.all().is_empty());
    }

    #[tokio::test]
    async fn adding_the_same_key_twice_never_duplicates() {
        let store = MemoryBlobStore::new();
        let mut favorites = FavoritesStore::load(store.clone()).await;
        favorites.add(favorite(7, "A")).await.unwrap();
        favorites.add(favorite(7, "A (again)")).await.unwrap();
        assert_eq!(favorites.all().len(), 1);
        assert_eq!(favorites.all()[0].title, "A");
    }

    #[tokio::test]
    async fn malformed_blob_downgrades_to_empty() {
        let store = MemoryBlobStore::new();
        store.seed(FAVORITES_KEY, "{not json").await;
        let favorites = FavoritesStore::load(store.clone()).await;
        assert!(favorites.all().is_empty());
    }

    #[tokio::test]
    async fn non_list_blob_downgrades_to_empty() {
        let store = MemoryBlobStore::new();
        store.seed(FAVORITES_KEY, r#"{"key":"7"}"#).await;
        let favorites = FavoritesStore::load(store.clone()).await;
        assert!(favorites.all().is_empty());
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let store = MemoryBlobStore::new();
        let mut favorites = FavoritesStore::load(store.clone()).await;
        favorites.add(favorite(1, "첫째")).await.unwrap();
        favorites.add(favorite(2, "둘째")).await.unwrap();
        favorites.add(favorite(3, "셋째")).await.unwrap();
        let titles: Vec<_> = favorites.all().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["첫째", "둘째", "셋째"]);
    }
}
