use chrono::NaiveDate;
use tmdb::models::Movie;

use crate::aggregator::{Aggregator, Snapshot};
use crate::favorites::{BlobStore, FavoritesError, FavoritesStore};
use crate::models::{Favorite, Record};
use crate::{ArchiveError, CatalogProvider, RegistryProvider};

/// Where a load currently stands. Updated only at the defined transition
/// points: load start, load success, load failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// What the display is showing: the four sections, or search results that
/// replace them until the query is cleared.
#[derive(Debug, Clone)]
pub enum View {
    Sections,
    Search { query: String, results: Vec<Movie> },
}

/// Process-local display state: the current snapshot, the active view, the
/// selection, and the favorites list. Rebuilt on every load; only favorites
/// persist. There is no cancellation — whichever load or search finishes
/// last owns the state.
pub struct Session<C, R, S> {
    aggregator: Aggregator<C, R>,
    favorites: FavoritesStore<S>,
    phase: LoadPhase,
    snapshot: Snapshot,
    view: View,
    selected: Option<Record>,
}

impl<C, R, S> Session<C, R, S>
where
    C: CatalogProvider,
    R: RegistryProvider,
    S: BlobStore,
{
    pub fn new(aggregator: Aggregator<C, R>, favorites: FavoritesStore<S>) -> Self {
        Self {
            aggregator,
            favorites,
            phase: LoadPhase::Idle,
            snapshot: Snapshot::default(),
            view: View::Sections,
            selected: None,
        }
    }

    /// Run a full load against today's date.
    pub async fn load(&mut self) {
        self.load_at(chrono::Utc::now().date_naive()).await
    }

    /// Run a full load against an explicit reference date.
    ///
    /// On failure the previous snapshot is discarded; a stale view is worse
    /// than an honest error.
    pub async fn load_at(&mut self, reference: NaiveDate) {
        self.phase = LoadPhase::Loading;
        match self.aggregator.load_at(reference).await {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.view = View::Sections;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                tracing::error!("load failed: {e}");
                self.snapshot = Snapshot::default();
                self.phase = LoadPhase::Failed(e.to_string());
            }
        }
    }

    /// Free-text search; results replace the section view until cleared.
    /// State is untouched when the search itself fails.
    pub async fn search(&mut self, query: &str) -> Result<(), ArchiveError> {
        let results = self.aggregator.search(query).await?;
        self.view = View::Search {
            query: query.to_string(),
            results,
        };
        Ok(())
    }

    pub fn clear_search(&mut self) {
        self.view = View::Sections;
    }

    pub fn select(&mut self, record: Record) {
        self.selected = Some(record);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn favorites(&self) -> &[Favorite] {
        self.favorites.all()
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.is_favorite(key)
    }

    /// Add the record to favorites, or remove it if already present.
    /// Returns whether it is a favorite afterwards.
    pub async fn toggle_favorite(&mut self, record: &Record) -> Result<bool, FavoritesError> {
        let key = record.key();
        if self.favorites.is_favorite(&key) {
            self.favorites.remove(&key).await?;
            Ok(false)
        } else {
            self.favorites.add(Favorite::from(record)).await?;
            Ok(true)
        }
    }
}
