// Villa Catalog — Filter State
//
// The facet selection value object and its enumerated facets: named price
// brackets with interval resolution, sort criteria, and the partial-update
// carrier used for merge-semantics mutations.

use crate::listing::PropertyType;

/// Sort criteria for the result collection.
///
/// Every criterion is a total order whose tie-break is "preserve relative
/// input order" — consumers must use a stable sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Identity order. The catalog's incoming order is assumed newest-first.
    #[default]
    Newest,
    /// Reference-currency price, ascending. Missing price sorts as 0.
    PriceLow,
    /// Reference-currency price, descending. Missing price sorts as 0.
    PriceHigh,
    /// Bedroom count, descending.
    Bedrooms,
}

impl SortBy {
    /// Wire token used in the address encoding.
    pub fn token(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::Bedrooms => "bedrooms",
        }
    }

    /// Parse a wire token. Unrecognized tokens fall back to the default.
    pub fn from_token(token: &str) -> Self {
        match token {
            "price-low" => SortBy::PriceLow,
            "price-high" => SortBy::PriceHigh,
            "bedrooms" => SortBy::Bedrooms,
            _ => SortBy::Newest,
        }
    }
}

/// Half-open price interval `[min, max)`. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceBand {
    /// Whether a price lies within `[min, max)`.
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

/// Named price bracket selected in the price facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceRange {
    /// No price constraint.
    #[default]
    Any,
    /// Under $500k.
    Under500k,
    /// $500k – $1M.
    K500To1m,
    /// $1M – $2M.
    M1To2,
    /// $2M – $5M.
    M2To5,
    /// $5M or more.
    M5Plus,
}

impl PriceRange {
    /// Wire token used in the address encoding.
    pub fn token(&self) -> &'static str {
        match self {
            PriceRange::Any => "any",
            PriceRange::Under500k => "0-500k",
            PriceRange::K500To1m => "500k-1m",
            PriceRange::M1To2 => "1m-2m",
            PriceRange::M2To5 => "2m-5m",
            PriceRange::M5Plus => "5m+",
        }
    }

    /// Parse a wire token.
    ///
    /// Unrecognized tokens resolve to `Any`, i.e. an invalid bracket widens
    /// the filter instead of failing. Inherited from the source system and
    /// kept as-is; callers wanting strict validation must pre-check tokens.
    pub fn from_token(token: &str) -> Self {
        match token {
            "0-500k" => PriceRange::Under500k,
            "500k-1m" => PriceRange::K500To1m,
            "1m-2m" => PriceRange::M1To2,
            "2m-5m" => PriceRange::M2To5,
            "5m+" => PriceRange::M5Plus,
            _ => PriceRange::Any,
        }
    }

    /// Resolve the bracket to its numeric interval.
    pub fn band(&self) -> PriceBand {
        match self {
            PriceRange::Any => PriceBand { min: 0, max: None },
            PriceRange::Under500k => PriceBand {
                min: 0,
                max: Some(500_000),
            },
            PriceRange::K500To1m => PriceBand {
                min: 500_000,
                max: Some(1_000_000),
            },
            PriceRange::M1To2 => PriceBand {
                min: 1_000_000,
                max: Some(2_000_000),
            },
            PriceRange::M2To5 => PriceBand {
                min: 2_000_000,
                max: Some(5_000_000),
            },
            PriceRange::M5Plus => PriceBand {
                min: 5_000_000,
                max: None,
            },
        }
    }
}

/// The current facet selection.
///
/// Created with defaults at session start, optionally rehydrated from the
/// address encoding, and mutated only through [`FilterState::apply`] /
/// [`FilterState::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Free-text locality query. Empty or `"all"` means unconstrained.
    pub location: String,
    /// Property-type facet. `None` means all types.
    pub property_type: Option<PropertyType>,
    pub price_range: PriceRange,
    /// Minimum bedroom count. 0 means unconstrained; N means "N or more".
    pub bedrooms: u32,
    /// Minimum bathroom count. 0 means unconstrained.
    pub bathrooms: u32,
    /// Minimum parking-space count. 0 means unconstrained.
    pub parking: u32,
    /// Required feature labels, e.g. "Pool", "Ocean view". No duplicates.
    pub features: Vec<String>,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location: String::new(),
            property_type: None,
            price_range: PriceRange::Any,
            bedrooms: 0,
            bathrooms: 0,
            parking: 0,
            features: Vec::new(),
            sort_by: SortBy::Newest,
        }
    }
}

impl FilterState {
    /// Merge a partial update into this state. Unset fields are unchanged.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(property_type) = update.property_type {
            self.property_type = property_type;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(bedrooms) = update.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = update.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(parking) = update.parking {
            self.parking = parking;
        }
        if let Some(features) = update.features {
            self.features = dedup_labels(features);
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
    }

    /// Restore every facet to its default.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// True when every facet holds its default value.
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Partial update over [`FilterState`]. `None` fields are left unchanged.
///
/// `property_type` is doubly optional: the outer `Option` is "change this
/// facet or not", the inner one is the facet value ("all" = `None`).
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub location: Option<String>,
    pub property_type: Option<Option<PropertyType>>,
    pub price_range: Option<PriceRange>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub parking: Option<u32>,
    pub features: Option<Vec<String>>,
    pub sort_by: Option<SortBy>,
}

/// Drop duplicate labels, keeping the first occurrence of each.
pub(crate) fn dedup_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    labels
        .into_iter()
        .filter(|label| seen.insert(label.to_lowercase()))
        .collect()
}
