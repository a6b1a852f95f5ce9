//! rustwrr - an adaptive weighted backend picker for RPC clients
//!
//! This crate provides the connection-selection core of an RPC client:
//! - Smooth weighted round-robin selection across ready backend connections
//! - Per-call outcome feedback that de-prioritizes failing backends and
//!   restores recovering ones, with no external health-check loop
//! - Pluggable static-weight extraction from resolver metadata
//! - Atomic snapshot replacement when the ready set changes
//!
//! The host framework builds a [`WeightedPicker`] from its ready set, calls
//! [`WeightedPicker::pick`] for each outgoing call, and reports the outcome
//! through the returned [`Pick`] guard.

pub mod endpoint;
pub mod error;
pub mod picker;
pub mod weight;

pub use endpoint::{Endpoint, MetadataValue};
pub use error::PickError;
pub use picker::{CallOutcome, Pick, PickerBuilder, SharedPicker, WeightedPicker};
pub use weight::{DefaultWeightSource, WeightSource, DEFAULT_WEIGHT};
