//! Application services for the tenant registry.

mod registry;

pub use registry::{
    CreateTenantRequest, TenantRegistryError, TenantRegistryResult, TenantRegistryService,
    UpdateTenantRequest,
};
