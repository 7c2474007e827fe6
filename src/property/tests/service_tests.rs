//! Service orchestration tests for the property catalog.

use std::sync::Arc;

use crate::agent::{
    adapters::memory::InMemoryAgentDirectory,
    domain::{Agent, AgentId, NewAgent},
    ports::AgentDirectory,
};
use crate::property::{
    adapters::InMemoryPropertyDirectory,
    domain::PropertyId,
    services::{
        CreatePropertyRequest, PropertyCatalogError, PropertyCatalogService,
        UpdatePropertyRequest,
    },
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestCatalog =
    PropertyCatalogService<InMemoryPropertyDirectory, InMemoryAgentDirectory, DefaultClock>;

struct Harness {
    catalog: TestCatalog,
    agents: Arc<InMemoryAgentDirectory>,
}

#[fixture]
fn harness() -> Harness {
    let agents = Arc::new(InMemoryAgentDirectory::new());
    let catalog = PropertyCatalogService::new(
        Arc::new(InMemoryPropertyDirectory::new()),
        Arc::clone(&agents),
        Arc::new(DefaultClock),
    );
    Harness { catalog, agents }
}

async fn seed_agent(agents: &InMemoryAgentDirectory) -> AgentId {
    let agent = Agent::new(
        NewAgent {
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
            email: "john@example.com".to_owned(),
            mobile_number: "+1-555-123-4567".to_owned(),
        },
        &DefaultClock,
    );
    agents.insert(&agent).await.expect("seed agent");
    agent.id()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_stores_a_property_for_an_existing_agent(harness: Harness) {
    let agent_id = seed_agent(&harness.agents).await;

    let property = harness
        .catalog
        .create(CreatePropertyRequest::new("  12 Harbour St  ", agent_id))
        .await
        .expect("creation should succeed");

    assert_eq!(property.address(), "12 Harbour St");
    assert_eq!(property.agent_id(), agent_id);

    let managed = harness
        .catalog
        .find_by_agent(agent_id)
        .await
        .expect("lookup should succeed");
    assert_eq!(managed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_a_missing_agent_reference(harness: Harness) {
    let result = harness
        .catalog
        .create(CreatePropertyRequest::new("12 Harbour St", AgentId::new()))
        .await;

    let Err(PropertyCatalogError::Validation(errors)) = result else {
        panic!("expected a validation failure");
    };
    assert_eq!(errors.fields(), vec!["agentId"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_a_blank_address(harness: Harness) {
    let agent_id = seed_agent(&harness.agents).await;

    let result = harness
        .catalog
        .create(CreatePropertyRequest::new("   ", agent_id))
        .await;

    let Err(PropertyCatalogError::Validation(errors)) = result else {
        panic!("expected a validation failure");
    };
    assert_eq!(errors.fields(), vec!["address"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_a_missing_replacement_agent(harness: Harness) {
    let agent_id = seed_agent(&harness.agents).await;
    let property = harness
        .catalog
        .create(CreatePropertyRequest::new("12 Harbour St", agent_id))
        .await
        .expect("creation should succeed");

    let result = harness
        .catalog
        .update(
            property.id(),
            UpdatePropertyRequest::new().with_agent(AgentId::new()),
        )
        .await;

    assert!(matches!(
        result,
        Err(PropertyCatalogError::Validation(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_property_returns_none(harness: Harness) {
    let outcome = harness
        .catalog
        .update(
            PropertyId::new(),
            UpdatePropertyRequest::new().with_address("1 New St"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(outcome, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_record_existed(harness: Harness) {
    let agent_id = seed_agent(&harness.agents).await;
    let property = harness
        .catalog
        .create(CreatePropertyRequest::new("12 Harbour St", agent_id))
        .await
        .expect("creation should succeed");

    assert!(harness
        .catalog
        .delete(property.id())
        .await
        .expect("delete should succeed"));
    assert!(!harness
        .catalog
        .delete(property.id())
        .await
        .expect("delete should succeed"));
}
