//! Application services for the property catalog.

mod catalog;

pub use catalog::{
    CreatePropertyRequest, PropertyCatalogError, PropertyCatalogResult, PropertyCatalogService,
    UpdatePropertyRequest,
};
