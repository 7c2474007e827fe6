//! Domain model for property records.

mod ids;
mod property;

pub use ids::PropertyId;
pub use property::{NewProperty, Property, PropertyChanges};
