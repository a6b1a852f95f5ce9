//! Static weight extraction.
//!
//! Weights are capacity hints configured per backend and carried in endpoint
//! metadata. Extraction is a pluggable capability injected at build time and
//! consulted exactly once per backend, never on the pick path.

use crate::endpoint::{Endpoint, MetadataValue};

/// Baseline weight used when an endpoint carries no usable weight metadata.
pub const DEFAULT_WEIGHT: u32 = 10;

/// Extracts the configured static weight from a backend endpoint.
pub trait WeightSource: Send + Sync {
    /// Return the static weight for `endpoint`.
    fn weight(&self, endpoint: &Endpoint) -> u32;
}

impl<F> WeightSource for F
where
    F: Fn(&Endpoint) -> u32 + Send + Sync,
{
    fn weight(&self, endpoint: &Endpoint) -> u32 {
        self(endpoint)
    }
}

/// Default weight source: the `"weight"` metadata key.
///
/// A missing key, a non-integer value, or an integer outside the `u32` range
/// all resolve to [`DEFAULT_WEIGHT`]; malformed metadata is never an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWeightSource;

impl WeightSource for DefaultWeightSource {
    fn weight(&self, endpoint: &Endpoint) -> u32 {
        endpoint
            .metadata
            .get("weight")
            .and_then(MetadataValue::as_u32)
            .unwrap_or(DEFAULT_WEIGHT)
    }
}
