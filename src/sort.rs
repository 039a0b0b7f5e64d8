// Villa Catalog — Sort Comparator
//
// Stable ordering of a listing collection by the selected criterion.
// Ties preserve relative input order, so `Newest` is the identity.

use crate::filters::SortBy;
use crate::listing::Listing;

/// Sort a borrowed listing collection in place.
///
/// Uses stable sorts throughout; listings comparing equal keep the order
/// they arrived in.
pub fn sort_listings(listings: &mut [&Listing], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => {}
        SortBy::PriceLow => listings.sort_by_key(|listing| listing.price_usd_or_zero()),
        SortBy::PriceHigh => {
            listings.sort_by(|a, b| b.price_usd_or_zero().cmp(&a.price_usd_or_zero()))
        }
        SortBy::Bedrooms => listings.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms)),
    }
}
