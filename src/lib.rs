// Villa Catalog
//
// Client-side browsing engine for an in-memory real-estate listing catalog:
// facet filtering, deterministic ordering, page windowing, and two
// persistence surfaces (address-encoded filter state, durable favorites).
//
// The engine is synchronous and pure at the edges: a result page is always
// a fresh derivation of (catalog, filter state, page number), and the only
// mutable state lives in the two stores, each with a single writer path.

pub mod channel;
pub mod codec;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod listing;
pub mod paging;
pub mod pipeline;
pub mod predicate;
pub mod sort;
pub mod state;

pub use channel::{FileChannel, MemoryChannel, StateChannel};
pub use error::CatalogError;
pub use favorites::FavoritesStore;
pub use filters::{FilterState, FilterUpdate, PriceBand, PriceRange, SortBy};
pub use listing::{Listing, ListingFeatures, OwnershipType, PropertyType};
pub use paging::{window, PageWindow, DEFAULT_PAGE_SIZE};
pub use pipeline::{query, saved, similar_to, QueryPage};
pub use state::FilterStore;
