//! Per-backend weight state and outcome feedback.

use parking_lot::Mutex;
use tracing::trace;

/// Outcome of one completed call, as reported by the caller.
///
/// No further classification is carried; the original error, if any, stays
/// the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// The call completed successfully.
    Success,
    /// The call failed.
    Failure,
}

impl CallOutcome {
    /// Map a call result to an outcome, discarding payload and error detail.
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => CallOutcome::Success,
            Err(_) => CallOutcome::Failure,
        }
    }
}

/// Mutable weight state of one backend, guarded by the entry's mutex.
#[derive(Debug)]
pub(crate) struct WeightState {
    /// Running counter; rises by the effective weight on every pick and
    /// drops by the round's total when this entry wins.
    pub(crate) current: i64,

    /// Adaptive selection weight, adjusted by call outcomes.
    pub(crate) effective: u32,
}

/// One ready backend inside a picker snapshot.
///
/// The entry set is fixed for the snapshot's lifetime; only the weight state
/// behind the mutex changes.
#[derive(Debug)]
pub(crate) struct BackendEntry<H> {
    /// Opaque connection handle owned by the host framework.
    pub(crate) handle: H,

    /// Address string, used in logs only.
    pub(crate) label: String,

    /// Operator-configured capacity hint, fixed at build time.
    pub(crate) static_weight: u32,

    /// Weight state mutated on the pick and feedback paths.
    pub(crate) state: Mutex<WeightState>,
}

impl<H> BackendEntry<H> {
    pub(crate) fn new(handle: H, label: String, weight: u32) -> Self {
        Self {
            handle,
            label,
            static_weight: weight,
            state: Mutex::new(WeightState {
                current: i64::from(weight),
                effective: weight,
            }),
        }
    }

    /// Apply one call outcome to the effective weight.
    ///
    /// Failures on zero-static-weight backends are ignored (a draining
    /// backend is already minimally selected), and the weight saturates at
    /// `u32::MAX` and 0 instead of wrapping.
    pub(crate) fn record_outcome(&self, outcome: CallOutcome) {
        let mut state = self.state.lock();
        match outcome {
            CallOutcome::Failure => {
                if self.static_weight == 0 {
                    return;
                }
                state.effective = state.effective.saturating_sub(1);
                trace!(
                    backend = %self.label,
                    effective = state.effective,
                    "lowered weight after failed call"
                );
            }
            CallOutcome::Success => {
                if state.effective == u32::MAX {
                    return;
                }
                state.effective += 1;
                trace!(
                    backend = %self.label,
                    effective = state.effective,
                    "raised weight after successful call"
                );
            }
        }
    }
}
