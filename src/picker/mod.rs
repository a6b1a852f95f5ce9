//! Backend selection: snapshot construction and the SWRR pick path.

mod builder;
mod entry;
mod shared;
mod weighted;

pub use builder::PickerBuilder;
pub use entry::CallOutcome;
pub use shared::SharedPicker;
pub use weighted::{Pick, WeightedPicker};
