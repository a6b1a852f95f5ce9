//! Snapshot publication.
//!
//! The host rebuilds the picker whenever its ready set changes and swaps the
//! new snapshot in atomically. Calls in flight keep using the snapshot they
//! were picked from; its entries stay alive through the `Pick` guards.

use crate::error::PickError;
use crate::picker::weighted::{Pick, WeightedPicker};
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Atomically swappable holder for the current picker snapshot.
pub struct SharedPicker<H> {
    inner: ArcSwap<WeightedPicker<H>>,
}

impl<H> SharedPicker<H> {
    /// Wrap an already built snapshot.
    pub fn new(picker: WeightedPicker<H>) -> Self {
        Self {
            inner: ArcSwap::from_pointee(picker),
        }
    }

    /// Start with an empty snapshot; `pick` fails until the first [`store`].
    ///
    /// [`store`]: SharedPicker::store
    pub fn empty() -> Self {
        Self::new(WeightedPicker::from_entries(Vec::new()))
    }

    /// Publish a freshly built snapshot, discarding the previous one.
    pub fn store(&self, picker: WeightedPicker<H>) {
        self.inner.store(Arc::new(picker));
    }

    /// Pick from the current snapshot.
    pub fn pick(&self) -> Result<Pick<H>, PickError> {
        self.inner.load().pick()
    }

    /// Number of backends in the current snapshot.
    pub fn len(&self) -> usize {
        self.inner.load().len()
    }

    /// Whether the current snapshot holds no backends.
    pub fn is_empty(&self) -> bool {
        self.inner.load().is_empty()
    }
}

impl<H> Default for SharedPicker<H> {
    fn default() -> Self {
        Self::empty()
    }
}
