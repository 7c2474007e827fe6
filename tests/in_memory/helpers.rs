//! Shared test helpers for in-memory directory integration tests.

use cadastre::agent::{
    adapters::memory::InMemoryAgentDirectory,
    services::{AgentRosterService, CreateAgentRequest},
};
use cadastre::family::{adapters::InMemoryFamilyDirectory, services::FamilyLedgerService};
use cadastre::note::{adapters::InMemoryNoteDirectory, services::NotebookService};
use cadastre::property::{adapters::InMemoryPropertyDirectory, services::PropertyCatalogService};
use cadastre::tenant::{adapters::InMemoryTenantDirectory, services::TenantRegistryService};
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Roster service wired to an in-memory agent directory.
pub type Roster = AgentRosterService<InMemoryAgentDirectory, DefaultClock>;

/// Catalog service wired to in-memory directories.
pub type Catalog =
    PropertyCatalogService<InMemoryPropertyDirectory, InMemoryAgentDirectory, DefaultClock>;

/// Ledger service wired to in-memory directories.
pub type Ledger =
    FamilyLedgerService<InMemoryFamilyDirectory, InMemoryPropertyDirectory, DefaultClock>;

/// Registry service wired to in-memory directories.
pub type Registry =
    TenantRegistryService<InMemoryTenantDirectory, InMemoryFamilyDirectory, DefaultClock>;

/// Notebook service wired to in-memory directories.
pub type Notebook = NotebookService<
    InMemoryNoteDirectory,
    InMemoryAgentDirectory,
    InMemoryPropertyDirectory,
    DefaultClock,
>;

/// Every service of the office, sharing one set of in-memory directories.
pub struct Office {
    /// Agent roster service.
    pub roster: Roster,
    /// Property catalog service.
    pub catalog: Catalog,
    /// Family ledger service.
    pub ledger: Ledger,
    /// Tenant registry service.
    pub registry: Registry,
    /// Notebook service.
    pub notebook: Notebook,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a roster service over a fresh directory for each test.
#[fixture]
pub fn roster() -> Roster {
    AgentRosterService::new(
        Arc::new(InMemoryAgentDirectory::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a fully wired office over fresh directories for each test.
#[fixture]
pub fn office() -> Office {
    let clock = Arc::new(DefaultClock);
    let agents = Arc::new(InMemoryAgentDirectory::new());
    let properties = Arc::new(InMemoryPropertyDirectory::new());
    let families = Arc::new(InMemoryFamilyDirectory::new());

    Office {
        roster: AgentRosterService::new(Arc::clone(&agents), Arc::clone(&clock)),
        catalog: PropertyCatalogService::new(
            Arc::clone(&properties),
            Arc::clone(&agents),
            Arc::clone(&clock),
        ),
        ledger: FamilyLedgerService::new(
            Arc::clone(&families),
            Arc::clone(&properties),
            Arc::clone(&clock),
        ),
        registry: TenantRegistryService::new(
            Arc::new(InMemoryTenantDirectory::new()),
            Arc::clone(&families),
            Arc::clone(&clock),
        ),
        notebook: NotebookService::new(
            Arc::new(InMemoryNoteDirectory::new()),
            Arc::clone(&agents),
            Arc::clone(&properties),
            clock,
        ),
    }
}

/// Builds a valid agent creation request with a distinguishing name and
/// email.
pub fn agent_request(first_name: &str, email: &str) -> CreateAgentRequest {
    CreateAgentRequest::new(first_name, "Smith", email, "+1-555-123-4567")
}
