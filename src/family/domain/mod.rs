//! Domain model for family records.

mod family;
mod ids;

pub use family::{Family, FamilyChanges, NewFamily};
pub use ids::FamilyId;
