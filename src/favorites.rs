// Villa Catalog — Favorites Store
//
// A user-curated set of listing ids, independent of the filter state.
// Every mutation synchronously re-persists the whole set as a JSON array
// under a fixed namespace key; construction rehydrates from that key and
// malformed data falls back to an empty set.

use std::collections::HashSet;

use tracing::debug;

use crate::channel::{MemoryChannel, StateChannel};
use crate::error::CatalogError;

/// Channel key under which the favorites array is stored.
pub const STORAGE_KEY: &str = "bali-villas-favorites";

/// Duplicate-safe favorites set with O(1) membership tests.
#[derive(Debug)]
pub struct FavoritesStore<C: StateChannel = MemoryChannel> {
    ids: HashSet<String>,
    channel: C,
}

impl FavoritesStore<MemoryChannel> {
    /// An empty store with session-only persistence.
    pub fn new() -> Self {
        Self::with_channel(MemoryChannel::new())
    }
}

impl Default for FavoritesStore<MemoryChannel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StateChannel> FavoritesStore<C> {
    /// Rehydrate a store from `channel`.
    ///
    /// Absent or malformed persisted data must not fail initialization;
    /// either case yields an empty set.
    pub fn with_channel(channel: C) -> Self {
        let ids = channel
            .load(STORAGE_KEY)
            .and_then(|json| serde_json::from_str::<Vec<String>>(&json).ok())
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default();
        Self { ids, channel }
    }

    /// Flip membership of `id`: absent ids are added, present ids removed.
    ///
    /// Returns the membership state after the toggle. Toggling twice in a
    /// row restores the original set.
    pub fn toggle(&mut self, id: &str) -> Result<bool, CatalogError> {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        debug!(id, now_favorite, "favorite toggled");
        self.persist()?;
        Ok(now_favorite)
    }

    /// O(1) membership test.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// All favorited listing ids. Order is not meaningful.
    pub fn all(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Write the full set to the channel as a JSON array.
    ///
    /// Ids are sorted on the way out so the persisted form is deterministic.
    fn persist(&mut self) -> Result<(), CatalogError> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        let json = serde_json::to_string(&ids)?;
        self.channel.store(STORAGE_KEY, &json)
    }
}
