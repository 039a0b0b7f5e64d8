// Villa Catalog — Query Pipeline
//
// Orchestrates the browsing engine: filter the full catalog, order the
// survivors, then window the requested page. Pagination always operates on
// the filtered and sorted collection, never on the raw catalog.

use std::collections::HashSet;

use tracing::debug;

use crate::filters::FilterState;
use crate::listing::Listing;
use crate::paging::{window, PageWindow};
use crate::predicate::matches;
use crate::sort::sort_listings;

/// Price distance within which two listings count as similar.
pub const SIMILAR_PRICE_MARGIN: u64 = 500_000;

/// One page of query results plus result-count metadata.
///
/// Borrows from the catalog; a page is a pure derivation of
/// `(catalog, filters, page)` and is recomputed on any input change.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a> {
    /// The listings on the requested page, in display order.
    pub items: Vec<&'a Listing>,
    /// Number of listings matching the filters across all pages.
    pub total_count: usize,
    /// The resolved page window.
    pub window: PageWindow,
}

impl QueryPage<'_> {
    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    /// Page numbers to surface as pagination buttons.
    pub fn page_buttons(&self) -> &[usize] {
        &self.window.buttons
    }
}

/// Run the full pipeline for one page of results.
///
/// Applies the filter predicate to every listing, stable-sorts the
/// survivors by the state's criterion, and slices the requested page.
pub fn query<'a>(
    catalog: &'a [Listing],
    filters: &FilterState,
    page: usize,
    page_size: usize,
) -> QueryPage<'a> {
    let mut matched: Vec<&Listing> = catalog
        .iter()
        .filter(|listing| matches(listing, filters))
        .collect();
    sort_listings(&mut matched, filters.sort_by);

    let total_count = matched.len();
    let window = window(total_count, page_size, page);
    let items = matched[window.start..window.end].to_vec();

    debug!(
        total_count,
        page = window.page,
        total_pages = window.total_pages,
        "catalog query"
    );

    QueryPage {
        items,
        total_count,
        window,
    }
}

/// Listings similar to `reference`: same suburb, or priced within
/// [`SIMILAR_PRICE_MARGIN`] of it. The reference itself is excluded and
/// catalog order is preserved.
pub fn similar_to<'a>(catalog: &'a [Listing], reference: &Listing, limit: usize) -> Vec<&'a Listing> {
    let price = reference.price_usd_or_zero();
    catalog
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .filter(|candidate| {
            candidate.suburb == reference.suburb
                || candidate.price_usd_or_zero().abs_diff(price) < SIMILAR_PRICE_MARGIN
        })
        .take(limit)
        .collect()
}

/// Catalog entries whose id is in the favorites set, in catalog order.
pub fn saved<'a>(catalog: &'a [Listing], favorites: &HashSet<String>) -> Vec<&'a Listing> {
    catalog
        .iter()
        .filter(|listing| favorites.contains(&listing.id))
        .collect()
}
