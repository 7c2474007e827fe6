//! Port contracts for family record storage.

pub mod directory;

pub use directory::{FamilyDirectory, FamilyDirectoryError, FamilyDirectoryResult};
