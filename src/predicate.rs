// Villa Catalog — Filter Predicate Evaluator
//
// Decides, per listing, whether the full facet set is satisfied.
// Facets are checked cheapest-first and short-circuit on the first failure.

use crate::filters::FilterState;
use crate::listing::{Listing, ListingFeatures};

/// Location sentinel treated the same as an empty query.
const UNCONSTRAINED_LOCATION: &str = "all";

/// Evaluate the full facet set against one listing.
///
/// A listing passes only if every active constraint passes. Inactive
/// constraints (empty location, `None` type, `Any` bracket, zero minimums,
/// empty feature list) always pass.
pub fn matches(listing: &Listing, filters: &FilterState) -> bool {
    if !location_matches(listing, &filters.location) {
        return false;
    }

    // A listing without a type tag passes any type facet. Listings in the
    // source data predate the tag, so absence cannot be treated as mismatch.
    if let (Some(wanted), Some(tagged)) = (filters.property_type, listing.property_type) {
        if wanted != tagged {
            return false;
        }
    }

    if !filters
        .price_range
        .band()
        .contains(listing.price_usd_or_zero())
    {
        return false;
    }

    if filters.bedrooms > 0 && listing.bedrooms < filters.bedrooms {
        return false;
    }
    if filters.bathrooms > 0 && listing.bathrooms < filters.bathrooms {
        return false;
    }
    if filters.parking > 0 && listing.parking < filters.parking {
        return false;
    }

    filters
        .features
        .iter()
        .all(|label| feature_matches(listing, &label.to_lowercase()))
}

/// Case-insensitive substring match of the location query against the
/// listing's suburb and locality.
fn location_matches(listing: &Listing, query: &str) -> bool {
    if query.is_empty() || query.eq_ignore_ascii_case(UNCONSTRAINED_LOCATION) {
        return true;
    }
    let query = query.to_lowercase();
    if listing.suburb.to_lowercase().contains(&query) {
        return true;
    }
    listing
        .locality
        .as_deref()
        .is_some_and(|locality| locality.to_lowercase().contains(&query))
}

/// Match one required feature label (already lowercased) against a listing.
///
/// Strategies are tried in order; any single hit satisfies the label:
/// the structured pool flag, the view list (with the trailing " view"
/// stripped from the label), the furnishing descriptor, the free-text
/// amenity list, and finally the listing description.
fn feature_matches(listing: &Listing, label: &str) -> bool {
    if let Some(features) = &listing.features {
        if structured_feature_matches(features, label) {
            return true;
        }
    }
    listing
        .description
        .as_deref()
        .is_some_and(|description| description.to_lowercase().contains(label))
}

fn structured_feature_matches(features: &ListingFeatures, label: &str) -> bool {
    if label.contains("pool") && features.pool {
        return true;
    }

    if label.contains("view") {
        let wanted = label.replace(" view", "");
        if features
            .views
            .iter()
            .any(|view| view.to_lowercase().contains(&wanted))
        {
            return true;
        }
    }

    if label.contains("furnished")
        && features
            .furnishing
            .as_deref()
            .is_some_and(|furnishing| !furnishing.is_empty())
    {
        return true;
    }

    features
        .other
        .iter()
        .any(|item| item.to_lowercase().contains(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterState, FilterUpdate, PriceRange};
    use crate::listing::PropertyType;

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            address: "Jl. Raya 1".to_string(),
            price_usd: Some(750_000),
            price_idr: None,
            price_aud: None,
            suburb: "Canggu".to_string(),
            locality: Some("Berawa".to_string()),
            bedrooms: 3,
            bathrooms: 2,
            parking: 1,
            land_size: "400 m²".to_string(),
            description: Some("Tropical villa with lush garden".to_string()),
            property_type: Some(PropertyType::Villa),
            ownership: None,
            features: Some(ListingFeatures {
                pool: true,
                furnishing: Some("full".to_string()),
                views: vec!["ocean".to_string()],
                other: vec!["Air conditioning".to_string()],
            }),
        }
    }

    fn filters_with(update: FilterUpdate) -> FilterState {
        let mut filters = FilterState::default();
        filters.apply(update);
        filters
    }

    #[test]
    fn default_filters_pass_everything() {
        assert!(matches(&listing("a"), &FilterState::default()));
    }

    #[test]
    fn location_matches_suburb_or_locality_substring() {
        let subject = listing("a");
        for query in ["canggu", "CANGGU", "ber", "all", ""] {
            let filters = filters_with(FilterUpdate {
                location: Some(query.to_string()),
                ..FilterUpdate::default()
            });
            assert!(matches(&subject, &filters), "query {query:?} should pass");
        }
        let filters = filters_with(FilterUpdate {
            location: Some("ubud".to_string()),
            ..FilterUpdate::default()
        });
        assert!(!matches(&subject, &filters));
    }

    #[test]
    fn price_bracket_is_half_open() {
        let filters = filters_with(FilterUpdate {
            price_range: Some(PriceRange::K500To1m),
            ..FilterUpdate::default()
        });
        let mut subject = listing("a");
        subject.price_usd = Some(750_000);
        assert!(matches(&subject, &filters));
        subject.price_usd = Some(1_200_000);
        assert!(!matches(&subject, &filters));
    }

    #[test]
    fn missing_price_is_treated_as_zero() {
        let mut subject = listing("a");
        subject.price_usd = None;
        let filters = filters_with(FilterUpdate {
            price_range: Some(PriceRange::K500To1m),
            ..FilterUpdate::default()
        });
        assert!(!matches(&subject, &filters), "0 lies below the bracket");
        let filters = filters_with(FilterUpdate {
            price_range: Some(PriceRange::Under500k),
            ..FilterUpdate::default()
        });
        assert!(matches(&subject, &filters), "0 lies inside [0, 500k)");
    }

    #[test]
    fn minimum_counts_mean_n_or_more() {
        let subject = listing("a"); // 3 bed, 2 bath, 1 parking
        let filters = filters_with(FilterUpdate {
            bedrooms: Some(3),
            bathrooms: Some(2),
            parking: Some(1),
            ..FilterUpdate::default()
        });
        assert!(matches(&subject, &filters));
        let filters = filters_with(FilterUpdate {
            bedrooms: Some(4),
            ..FilterUpdate::default()
        });
        assert!(!matches(&subject, &filters));
    }

    #[test]
    fn type_facet_matches_tag_and_passes_untagged() {
        let mut subject = listing("a");
        let filters = filters_with(FilterUpdate {
            property_type: Some(Some(PropertyType::House)),
            ..FilterUpdate::default()
        });
        assert!(!matches(&subject, &filters), "villa is not a house");
        subject.property_type = None;
        assert!(matches(&subject, &filters), "untagged listing passes");
    }

    #[test]
    fn all_required_features_must_match() {
        let subject = listing("a");
        let filters = filters_with(FilterUpdate {
            features: Some(vec!["Pool".to_string(), "Furnished".to_string()]),
            ..FilterUpdate::default()
        });
        assert!(matches(&subject, &filters));

        let mut no_pool = subject.clone();
        no_pool.features.as_mut().unwrap().pool = false;
        no_pool.description = Some("Villa near the beach".to_string());
        assert!(
            !matches(&no_pool, &filters),
            "missing pool fails even when furnished"
        );
    }

    #[test]
    fn view_labels_match_against_view_list() {
        let subject = listing("a");
        let filters = filters_with(FilterUpdate {
            features: Some(vec!["Ocean view".to_string()]),
            ..FilterUpdate::default()
        });
        assert!(matches(&subject, &filters));
        let filters = filters_with(FilterUpdate {
            features: Some(vec!["Rice field view".to_string()]),
            ..FilterUpdate::default()
        });
        assert!(!matches(&subject, &filters));
    }

    #[test]
    fn amenity_labels_match_free_text_list() {
        let subject = listing("a");
        let filters = filters_with(FilterUpdate {
            features: Some(vec!["Air conditioning".to_string()]),
            ..FilterUpdate::default()
        });
        assert!(matches(&subject, &filters));
    }

    #[test]
    fn description_is_the_fallback_strategy() {
        let mut subject = listing("a");
        subject.features = None;
        let filters = filters_with(FilterUpdate {
            features: Some(vec!["Garden".to_string()]),
            ..FilterUpdate::default()
        });
        assert!(matches(&subject, &filters), "description mentions garden");

        subject.description = None;
        assert!(!matches(&subject, &filters));
    }
}
