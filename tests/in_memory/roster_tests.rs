//! Agent CRUD lifecycle through the roster service.

use super::helpers::{Roster, agent_request, roster, runtime};
use cadastre::agent::{
    domain::AgentId,
    services::{AgentRosterError, UpdateAgentRequest},
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn created_agents_are_retrievable_by_id(
    runtime: io::Result<Runtime>,
    roster: Roster,
) -> eyre::Result<()> {
    let rt = runtime?;

    let created = rt.block_on(roster.create(agent_request("John", "john@example.com")))?;
    let fetched = rt.block_on(roster.find_by_id(created.id()))?;

    assert_eq!(fetched, Some(created));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn lookups_for_unknown_identifiers_miss(
    runtime: io::Result<Runtime>,
    roster: Roster,
) -> eyre::Result<()> {
    let rt = runtime?;

    assert_eq!(rt.block_on(roster.find_by_id(AgentId::new()))?, None);
    assert!(!rt.block_on(roster.delete(AgentId::new()))?);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn a_patch_survives_a_later_lookup(
    runtime: io::Result<Runtime>,
    roster: Roster,
) -> eyre::Result<()> {
    let rt = runtime?;

    let created = rt.block_on(roster.create(agent_request("John", "john@example.com")))?;
    let patched = rt.block_on(roster.update(
        created.id(),
        UpdateAgentRequest::new().with_email("John.Smith@Example.com"),
    ))?;
    let fetched = rt.block_on(roster.find_by_id(created.id()))?;

    assert_eq!(patched, fetched);
    assert_eq!(
        fetched.as_ref().map(|agent| agent.email()),
        Some("john.smith@example.com")
    );
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn deleted_agents_stay_gone(runtime: io::Result<Runtime>, roster: Roster) -> eyre::Result<()> {
    let rt = runtime?;

    let created = rt.block_on(roster.create(agent_request("John", "john@example.com")))?;

    assert!(rt.block_on(roster.delete(created.id()))?);
    assert_eq!(rt.block_on(roster.find_by_id(created.id()))?, None);
    assert!(rt.block_on(roster.all())?.is_empty());
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn rejected_submissions_leave_the_roster_untouched(
    runtime: io::Result<Runtime>,
    roster: Roster,
) -> eyre::Result<()> {
    let rt = runtime?;

    let result = rt.block_on(roster.create(agent_request("", "broken")));

    assert!(matches!(result, Err(AgentRosterError::Validation(_))));
    assert!(rt.block_on(roster.all())?.is_empty());
    Ok(())
}
