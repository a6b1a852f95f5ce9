//! Snapshot construction.

use crate::endpoint::Endpoint;
use crate::picker::entry::BackendEntry;
use crate::picker::weighted::WeightedPicker;
use crate::weight::{DefaultWeightSource, WeightSource};
use std::sync::Arc;
use tracing::debug;

/// Builds [`WeightedPicker`] snapshots from the current ready set.
///
/// The host keeps one builder and calls [`build`](PickerBuilder::build) every
/// time the ready set changes. The injected [`WeightSource`] is consulted
/// exactly once per backend per build.
pub struct PickerBuilder {
    weight_source: Arc<dyn WeightSource>,
}

impl PickerBuilder {
    /// Create a builder using [`DefaultWeightSource`].
    pub fn new() -> Self {
        Self {
            weight_source: Arc::new(DefaultWeightSource),
        }
    }

    /// Replace the weight source used at build time.
    pub fn with_weight_source(mut self, source: impl WeightSource + 'static) -> Self {
        self.weight_source = Arc::new(source);
        self
    }

    /// Build a snapshot over `ready`, preserving its iteration order.
    ///
    /// The order determines tie-breaking between equally saturated backends,
    /// so the caller supplies an ordered sequence rather than an unordered
    /// map. Each entry starts with its current and effective weights equal to
    /// the extracted static weight. An empty ready set yields an empty
    /// picker whose `pick` always fails.
    pub fn build<H>(&self, ready: impl IntoIterator<Item = (H, Endpoint)>) -> WeightedPicker<H> {
        let entries: Vec<Arc<BackendEntry<H>>> = ready
            .into_iter()
            .map(|(handle, endpoint)| {
                let weight = self.weight_source.weight(&endpoint);
                debug!(backend = %endpoint.addr, weight, "registered backend");
                Arc::new(BackendEntry::new(handle, endpoint.addr, weight))
            })
            .collect();

        WeightedPicker::from_entries(entries)
    }
}

impl Default for PickerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
