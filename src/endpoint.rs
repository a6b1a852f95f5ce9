//! Backend endpoint descriptions.
//!
//! An [`Endpoint`] is the host-facing description of one ready backend: its
//! address string plus whatever attribute bag the resolver or configuration
//! attached to it. The picker never interprets metadata itself; weight
//! extraction goes through [`WeightSource`](crate::weight::WeightSource).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single scalar value carried in endpoint metadata.
///
/// Resolver attribute bags are loosely typed; this enum covers the scalar
/// shapes that occur in practice so they survive (de)serialization intact.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Integer value (configured weights use this shape).
    Integer(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Free-form string.
    String(String),
}

impl MetadataValue {
    /// Interpret the value as an unsigned 32-bit integer.
    ///
    /// Returns `None` for non-integer values and for integers outside the
    /// `u32` range.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            MetadataValue::Integer(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        MetadataValue::Integer(i64::from(value))
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Float(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

/// Description of one ready backend: address plus resolver metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Endpoint {
    /// Backend address; used as the diagnostic label on the pick path.
    pub addr: String,

    /// Attribute bag attached by the resolver or configuration.
    #[serde(default)]
    pub metadata: HashMap<String, MetadataValue>,
}

impl Endpoint {
    /// Create an endpoint with an empty attribute bag.
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach one metadata entry, consuming and returning the endpoint.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
