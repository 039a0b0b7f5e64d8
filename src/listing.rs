// Villa Catalog — Listing Data Model
//
// The immutable listing record supplied by the external catalog source.
// The engine only reads listings; it never creates or mutates them.

use serde::{Deserialize, Serialize};

/// Structured property type tag.
///
/// Listings may carry one of these; a listing without a tag passes the
/// property-type facet automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Villa,
    House,
    Apartment,
    Land,
    Commercial,
    Townhouse,
}

impl PropertyType {
    /// Wire token used in the address encoding.
    pub fn token(&self) -> &'static str {
        match self {
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Townhouse => "townhouse",
        }
    }

    /// Parse a wire token. Unknown tokens yield `None` (= no constraint).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "villa" => Some(PropertyType::Villa),
            "house" => Some(PropertyType::House),
            "apartment" => Some(PropertyType::Apartment),
            "land" => Some(PropertyType::Land),
            "commercial" => Some(PropertyType::Commercial),
            "townhouse" => Some(PropertyType::Townhouse),
            _ => None,
        }
    }
}

/// Ownership tenure tag. Data-only: carried through serialization for the
/// presentation layer, never filtered on by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipType {
    Freehold,
    Leasehold,
}

/// Structured feature set attached to a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFeatures {
    /// Private pool flag.
    #[serde(default)]
    pub pool: bool,
    /// Furnishing descriptor, e.g. "full" or "partial". Non-empty means
    /// the listing counts as furnished.
    #[serde(default)]
    pub furnishing: Option<String>,
    /// View descriptors, e.g. "ocean", "rice field".
    #[serde(default)]
    pub views: Vec<String>,
    /// Free-text amenities not covered by the structured fields.
    #[serde(default)]
    pub other: Vec<String>,
}

/// A single catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique identifier.
    pub id: String,
    pub title: String,
    pub address: String,
    /// Reference-currency price. Treated as 0 wherever it is compared.
    #[serde(rename = "priceUSD", default)]
    pub price_usd: Option<u64>,
    /// Secondary-currency prices, carried for the presentation layer.
    #[serde(rename = "priceIDR", default)]
    pub price_idr: Option<u64>,
    #[serde(rename = "priceAUD", default)]
    pub price_aud: Option<u64>,
    pub suburb: String,
    #[serde(default)]
    pub locality: Option<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub parking: u32,
    /// Land-size descriptor, e.g. "450 m²".
    #[serde(default)]
    pub land_size: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub ownership: Option<OwnershipType>,
    #[serde(default)]
    pub features: Option<ListingFeatures>,
}

impl Listing {
    /// Reference-currency price with the missing-price default applied.
    pub fn price_usd_or_zero(&self) -> u64 {
        self.price_usd.unwrap_or(0)
    }
}
