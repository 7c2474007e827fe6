//! Roster search end to end, through the service and in-memory directory.

use super::helpers::{Roster, agent_request, roster, runtime};
use cadastre::agent::{
    adapters::memory::InMemoryAgentDirectory,
    domain::{Agent, AgentSearchParams, SearchDefaults},
    services::AgentRosterService,
};
use mockable::DefaultClock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Seeds three agents, oldest first, returning their first names in
/// insertion order.
fn seed_three(rt: &Runtime, roster: &Roster) -> eyre::Result<()> {
    for (first_name, email) in [
        ("John", "john@example.com"),
        ("Jane", "jane@example.org"),
        ("Alice", "alice@example.net"),
    ] {
        rt.block_on(roster.create(agent_request(first_name, email)))?;
    }
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn an_empty_roster_searches_clean(runtime: io::Result<Runtime>, roster: Roster) -> eyre::Result<()> {
    let rt = runtime?;

    let result = rt.block_on(roster.search(&AgentSearchParams::new()))?;

    assert!(result.data.is_empty());
    assert_eq!(result.pagination.page, 1);
    assert_eq!(result.pagination.limit, 2);
    assert_eq!(result.pagination.total, 0);
    assert_eq!(result.pagination.total_pages, 0);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn the_default_page_holds_the_two_newest_records(
    runtime: io::Result<Runtime>,
    roster: Roster,
) -> eyre::Result<()> {
    let rt = runtime?;
    seed_three(&rt, &roster)?;

    let first_page = rt.block_on(roster.search(&AgentSearchParams::new()))?;

    assert_eq!(first_page.data.len(), 2);
    assert_eq!(first_page.data.first().map(Agent::first_name), Some("Alice"));
    assert_eq!(first_page.pagination.total, 3);
    assert_eq!(first_page.pagination.total_pages, 2);

    let second_page =
        rt.block_on(roster.search(&AgentSearchParams::new().with_page(2).with_limit(2)))?;

    assert_eq!(second_page.data.len(), 1);
    assert_eq!(second_page.data.first().map(Agent::first_name), Some("John"));
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn text_search_reaches_every_contact_field(
    runtime: io::Result<Runtime>,
    roster: Roster,
) -> eyre::Result<()> {
    let rt = runtime?;
    seed_three(&rt, &roster)?;

    let by_name = rt.block_on(roster.search(&AgentSearchParams::new().with_search("john")))?;
    assert_eq!(by_name.pagination.total, 1);
    assert_eq!(by_name.data.first().map(Agent::first_name), Some("John"));

    let by_email =
        rt.block_on(roster.search(&AgentSearchParams::new().with_search("example.org")))?;
    assert_eq!(by_email.data.first().map(Agent::first_name), Some("Jane"));

    let nobody = rt.block_on(roster.search(&AgentSearchParams::new().with_search("zzz")))?;
    assert_eq!(nobody.pagination.total, 0);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn a_configured_page_size_applies_to_every_search(
    runtime: io::Result<Runtime>,
) -> eyre::Result<()> {
    let rt = runtime?;
    let wide_roster: Roster = AgentRosterService::new(
        Arc::new(InMemoryAgentDirectory::with_defaults(SearchDefaults {
            page_size: 10,
        })),
        Arc::new(DefaultClock),
    );
    seed_three(&rt, &wide_roster)?;

    let result = rt.block_on(wide_roster.search(&AgentSearchParams::new()))?;

    assert_eq!(result.data.len(), 3);
    assert_eq!(result.pagination.limit, 10);
    assert_eq!(result.pagination.total_pages, 1);
    Ok(())
}
