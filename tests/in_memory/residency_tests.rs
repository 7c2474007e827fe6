//! Cross-context flows: agents managing properties, families moving in,
//! tenants joining, and notes following along.

use super::helpers::{Office, agent_request, office, runtime};
use cadastre::family::services::{CreateFamilyRequest, FamilyLedgerError};
use cadastre::note::services::CreateNoteRequest;
use cadastre::property::services::CreatePropertyRequest;
use cadastre::tenant::services::CreateTenantRequest;
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn a_full_household_can_be_recorded(
    runtime: io::Result<Runtime>,
    office: Office,
) -> eyre::Result<()> {
    let rt = runtime?;

    let agent = rt.block_on(
        office
            .roster
            .create(agent_request("John", "john@example.com")),
    )?;
    let property = rt.block_on(
        office
            .catalog
            .create(CreatePropertyRequest::new("12 Harbour St", agent.id())),
    )?;
    let family = rt.block_on(
        office
            .ledger
            .create(CreateFamilyRequest::new("The Smiths", property.id())),
    )?;
    let tenant = rt.block_on(
        office.registry.create(
            CreateTenantRequest::new("Mary", "Smith", family.id())
                .with_email("mary@example.com"),
        ),
    )?;
    let note = rt.block_on(
        office.notebook.create(
            CreateNoteRequest::new("Inspection", agent.id())
                .with_property(property.id())
                .with_reminder(true),
        ),
    )?;

    let managed = rt.block_on(office.catalog.find_by_agent(agent.id()))?;
    assert_eq!(managed.len(), 1);

    let occupant = rt.block_on(office.ledger.find_by_property(property.id()))?;
    assert_eq!(occupant, Some(family.clone()));

    let household = rt.block_on(office.registry.find_by_family(family.id()))?;
    assert_eq!(household, vec![tenant]);

    let property_notes = rt.block_on(office.notebook.find_by_property(property.id()))?;
    assert_eq!(property_notes, vec![note]);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn a_second_family_cannot_move_into_an_occupied_property(
    runtime: io::Result<Runtime>,
    office: Office,
) -> eyre::Result<()> {
    let rt = runtime?;

    let agent = rt.block_on(
        office
            .roster
            .create(agent_request("John", "john@example.com")),
    )?;
    let property = rt.block_on(
        office
            .catalog
            .create(CreatePropertyRequest::new("12 Harbour St", agent.id())),
    )?;
    rt.block_on(
        office
            .ledger
            .create(CreateFamilyRequest::new("The Smiths", property.id())),
    )?;

    let result = rt.block_on(
        office
            .ledger
            .create(CreateFamilyRequest::new("The Browns", property.id())),
    );

    assert!(matches!(result, Err(FamilyLedgerError::Validation(_))));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn removing_an_agent_leaves_their_records_behind(
    runtime: io::Result<Runtime>,
    office: Office,
) -> eyre::Result<()> {
    let rt = runtime?;

    let agent = rt.block_on(
        office
            .roster
            .create(agent_request("John", "john@example.com")),
    )?;
    let property = rt.block_on(
        office
            .catalog
            .create(CreatePropertyRequest::new("12 Harbour St", agent.id())),
    )?;
    let note = rt.block_on(
        office
            .notebook
            .create(CreateNoteRequest::new("Handover", agent.id())),
    )?;

    assert!(rt.block_on(office.roster.delete(agent.id()))?);

    assert_eq!(
        rt.block_on(office.catalog.find_by_id(property.id()))?,
        Some(property)
    );
    assert_eq!(
        rt.block_on(office.notebook.find_by_id(note.id()))?,
        Some(note)
    );
    Ok(())
}
