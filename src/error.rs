//! Picker errors.

use thiserror::Error;

/// Errors returned by the pick path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    /// The current snapshot holds no ready backends.
    #[error("no backend available")]
    NoBackendAvailable,
}
