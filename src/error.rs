// Villa Catalog — Error Types
//
// Structured error types for catalog persistence operations.
//
// The browsing core itself never fails on malformed input: unknown price
// brackets widen to "any", unparsable numerics decode to 0, malformed
// persisted favorites fall back to an empty set. Only the persistence
// channel (file I/O, JSON encoding) can produce a real error.

use thiserror::Error;

/// Main error type for catalog persistence operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON serialization/deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File system I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by a custom `StateChannel` implementation.
    #[error("channel error: {0}")]
    Channel(String),
}
