// Villa Catalog — Address Codec
//
// Serializes the filter state to and from the shareable address encoding
// (a query-string-like text form). Default-valued facets are omitted, so a
// fully-default state encodes to the empty string and an absent key decodes
// to the facet's default.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::filters::{dedup_labels, FilterState, PriceRange, SortBy};
use crate::listing::PropertyType;

/// Characters escaped in address values: controls plus the pair separator,
/// the key/value separator, the feature-list separator, and characters that
/// carry meaning in URLs.
const VALUE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'&')
    .add(b'=')
    .add(b'%')
    .add(b'#')
    .add(b'?')
    .add(b'+')
    .add(b',');

fn escape(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODE_SET).to_string()
}

fn unescape(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

/// Encode a filter state as an address string.
///
/// Only non-default facets produce a key; `features` is comma-joined with
/// each label escaped individually so the separators survive.
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if !state.location.is_empty() {
        pairs.push(format!("location={}", escape(&state.location)));
    }
    if let Some(property_type) = state.property_type {
        pairs.push(format!("propertyType={}", property_type.token()));
    }
    if state.price_range != PriceRange::Any {
        pairs.push(format!("priceRange={}", state.price_range.token()));
    }
    if state.bedrooms > 0 {
        pairs.push(format!("bedrooms={}", state.bedrooms));
    }
    if state.bathrooms > 0 {
        pairs.push(format!("bathrooms={}", state.bathrooms));
    }
    if state.parking > 0 {
        pairs.push(format!("parking={}", state.parking));
    }
    if !state.features.is_empty() {
        let joined: Vec<String> = state.features.iter().map(|label| escape(label)).collect();
        pairs.push(format!("features={}", joined.join(",")));
    }
    if state.sort_by != SortBy::Newest {
        pairs.push(format!("sortBy={}", state.sort_by.token()));
    }

    pairs.join("&")
}

/// Decode an address string into a filter state.
///
/// Absent keys yield defaults, unparsable numerics yield 0, and unknown
/// enum tokens fall back to their default variant. A leading `?` is
/// tolerated so raw query strings can be passed through unchanged.
pub fn decode(address: &str) -> FilterState {
    let mut state = FilterState::default();
    let address = address.strip_prefix('?').unwrap_or(address);
    if address.is_empty() {
        return state;
    }

    for pair in address.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");
        match key {
            "location" => state.location = unescape(value),
            "propertyType" => state.property_type = PropertyType::from_token(&unescape(value)),
            "priceRange" => state.price_range = PriceRange::from_token(&unescape(value)),
            "bedrooms" => state.bedrooms = parse_count(value),
            "bathrooms" => state.bathrooms = parse_count(value),
            "parking" => state.parking = parse_count(value),
            "features" => {
                // Dedup here too: a hand-edited address may repeat labels,
                // and the no-duplicates invariant must hold however the
                // state is built.
                state.features = dedup_labels(
                    value
                        .split(',')
                        .filter(|token| !token.is_empty())
                        .map(unescape)
                        .collect(),
                );
            }
            "sortBy" => state.sort_by = SortBy::from_token(&unescape(value)),
            // Unknown keys are presentation-layer noise; ignore them.
            _ => {}
        }
    }

    state
}

/// Numeric facet parsing: anything unparsable means "unconstrained".
fn parse_count(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}
