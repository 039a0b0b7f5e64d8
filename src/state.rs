// Villa Catalog — Filter State Store
//
// Owns the current facet selection. Every mutation goes through the store,
// which re-encodes the state and writes it to the attached channel so the
// selection survives reloads and can be shared as an address.

use tracing::debug;

use crate::channel::{MemoryChannel, StateChannel};
use crate::codec;
use crate::error::CatalogError;
use crate::filters::{FilterState, FilterUpdate};

/// Channel key under which the encoded filter state is stored.
pub const ADDRESS_KEY: &str = "search";

/// The single source of truth for the facet selection.
#[derive(Debug)]
pub struct FilterStore<C: StateChannel = MemoryChannel> {
    filters: FilterState,
    channel: C,
}

impl FilterStore<MemoryChannel> {
    /// A store with defaults and session-only persistence.
    pub fn new() -> Self {
        Self::with_channel(MemoryChannel::new())
    }
}

impl Default for FilterStore<MemoryChannel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StateChannel> FilterStore<C> {
    /// Rehydrate a store from `channel`, defaulting when nothing is stored.
    pub fn with_channel(channel: C) -> Self {
        let filters = match channel.load(ADDRESS_KEY) {
            Some(address) => codec::decode(&address),
            None => FilterState::default(),
        };
        Self { filters, channel }
    }

    /// The current facet selection.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Merge a partial update and re-persist the encoded state.
    pub fn apply(&mut self, update: FilterUpdate) -> Result<(), CatalogError> {
        self.filters.apply(update);
        self.sync()
    }

    /// Restore every facet to its default and re-persist.
    pub fn reset(&mut self) -> Result<(), CatalogError> {
        self.filters.reset();
        self.sync()
    }

    /// The current address encoding of the state.
    pub fn encoded(&self) -> String {
        codec::encode(&self.filters)
    }

    fn sync(&mut self) -> Result<(), CatalogError> {
        let address = self.encoded();
        debug!(address = %address, "filter state changed");
        self.channel.store(ADDRESS_KEY, &address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{PriceRange, SortBy};

    #[test]
    fn new_store_starts_at_defaults() {
        let store = FilterStore::new();
        assert!(store.filters().is_default());
        assert_eq!(store.encoded(), "");
    }

    #[test]
    fn apply_persists_the_encoding() {
        let mut store = FilterStore::new();
        store
            .apply(FilterUpdate {
                bedrooms: Some(3),
                price_range: Some(PriceRange::K500To1m),
                ..FilterUpdate::default()
            })
            .unwrap();
        assert_eq!(store.encoded(), "priceRange=500k-1m&bedrooms=3");
    }

    #[test]
    fn store_rehydrates_from_channel() {
        let mut channel = MemoryChannel::new();
        channel
            .store(ADDRESS_KEY, "location=canggu&sortBy=price-high")
            .unwrap();
        let store = FilterStore::with_channel(channel);
        assert_eq!(store.filters().location, "canggu");
        assert_eq!(store.filters().sort_by, SortBy::PriceHigh);
    }

    #[test]
    fn rehydration_deduplicates_feature_labels() {
        let mut channel = MemoryChannel::new();
        channel
            .store(ADDRESS_KEY, "features=Pool,pool,Garden")
            .unwrap();
        let store = FilterStore::with_channel(channel);
        assert_eq!(store.filters().features, vec!["Pool", "Garden"]);
        assert_eq!(store.encoded(), "features=Pool,Garden");
    }

    #[test]
    fn mutations_survive_a_reload() {
        let mut store = FilterStore::new();
        store
            .apply(FilterUpdate {
                parking: Some(2),
                features: Some(vec!["Pool".to_string()]),
                ..FilterUpdate::default()
            })
            .unwrap();
        let FilterStore { channel, .. } = store;

        let reloaded = FilterStore::with_channel(channel);
        assert_eq!(reloaded.filters().parking, 2);
        assert_eq!(reloaded.filters().features, vec!["Pool"]);
    }

    #[test]
    fn reset_clears_the_persisted_address() {
        let mut store = FilterStore::new();
        store
            .apply(FilterUpdate {
                bedrooms: Some(4),
                ..FilterUpdate::default()
            })
            .unwrap();
        store.reset().unwrap();
        assert!(store.filters().is_default());
        assert_eq!(store.encoded(), "");
        let FilterStore { channel, .. } = store;
        assert_eq!(channel.load(ADDRESS_KEY), Some(String::new()));
    }
}
