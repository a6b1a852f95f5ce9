//! Smooth weighted round-robin selection.
//!
//! The algorithm is the one used by nginx-style upstream schedulers: every
//! pick raises each backend's running counter by its effective weight, takes
//! the backend with the highest counter, then charges the winner the sum of
//! all effective weights. Selections land proportionally to weight without
//! bursting on any single backend.

use crate::error::PickError;
use crate::picker::entry::{BackendEntry, CallOutcome};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// An immutable snapshot of the ready backend set.
///
/// Built by [`PickerBuilder`](crate::picker::PickerBuilder) whenever the
/// ready set changes. The entry list is fixed for the snapshot's lifetime;
/// the host replaces the whole snapshot rather than patching it. [`pick`]
/// is safe to call from many threads at once.
///
/// [`pick`]: WeightedPicker::pick
pub struct WeightedPicker<H> {
    /// Entries in build order. The scan order breaks ties between equally
    /// saturated backends, so it must stay stable across picks.
    pub(crate) entries: Vec<Arc<BackendEntry<H>>>,
}

impl<H> WeightedPicker<H> {
    pub(crate) fn from_entries(entries: Vec<Arc<BackendEntry<H>>>) -> Self {
        Self { entries }
    }

    /// Number of backends in this snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this snapshot holds no backends.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Select the backend for the next outgoing call.
    ///
    /// Returns a [`Pick`] guard carrying the chosen handle; the caller issues
    /// the call and reports its outcome through [`Pick::complete`]. Fails
    /// with [`PickError::NoBackendAvailable`] when the snapshot is empty.
    pub fn pick(&self) -> Result<Pick<H>, PickError> {
        if self.entries.is_empty() {
            warn!("pick on empty backend set");
            return Err(PickError::NoBackendAvailable);
        }

        let mut total: i64 = 0;
        let mut best: Option<(usize, i64)> = None;

        // No lock is held across entries; concurrent picks may interleave,
        // so the total is a best-effort snapshot. The comparison uses each
        // candidate's counter as observed under its own lock, and the first
        // entry wins ties.
        for (idx, entry) in self.entries.iter().enumerate() {
            let mut state = entry.state.lock();
            let effective = i64::from(state.effective);
            total += effective;
            state.current += effective;
            let leads = match best {
                None => true,
                Some((_, best_current)) => state.current > best_current,
            };
            if leads {
                best = Some((idx, state.current));
            }
        }

        let Some((idx, _)) = best else {
            return Err(PickError::NoBackendAvailable);
        };

        let entry = Arc::clone(&self.entries[idx]);
        entry.state.lock().current -= total;
        debug!(backend = %entry.label, "selected backend");

        Ok(Pick { entry })
    }
}

impl<H> fmt::Debug for WeightedPicker<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedPicker")
            .field("backends", &self.entries.iter().map(|e| e.label.as_str()).collect::<Vec<_>>())
            .finish()
    }
}

/// A selected backend plus the completion hook for the call it will carry.
///
/// The guard keeps its entry alive even if the host swaps in a new snapshot
/// while the call is in flight. Consuming [`complete`](Pick::complete)
/// reports the outcome at most once; dropping the guard without completing
/// leaves the weights untouched.
pub struct Pick<H> {
    entry: Arc<BackendEntry<H>>,
}

impl<H> Pick<H> {
    /// The connection handle to issue the call on.
    pub fn handle(&self) -> &H {
        &self.entry.handle
    }

    /// Address label of the selected backend.
    pub fn label(&self) -> &str {
        &self.entry.label
    }

    /// Report the call outcome, adjusting the backend's effective weight.
    pub fn complete(self, outcome: CallOutcome) {
        self.entry.record_outcome(outcome);
    }
}

impl<H> fmt::Debug for Pick<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pick").field("backend", &self.entry.label).finish()
    }
}
