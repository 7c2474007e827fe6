//! Tests for the search pipeline: filtering, ordering, and page arithmetic.

use super::{FixedClock, instant};
use crate::agent::domain::{
    Agent, AgentSearchParams, DEFAULT_PAGE_SIZE, NewAgent, SearchDefaults, run_search,
};
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use rstest::rstest;

/// Reference instant all pipeline fixtures hang off.
static NOON: Lazy<DateTime<Utc>> = Lazy::new(|| instant("2024-03-15T12:00:00Z"));

fn roster_agent(first: &str, last: &str, email: &str, mobile: &str, at: DateTime<Utc>) -> Agent {
    Agent::new(
        NewAgent {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: email.to_owned(),
            mobile_number: mobile.to_owned(),
        },
        &FixedClock(at),
    )
}

/// Three agents created an hour apart, oldest first.
fn staggered_roster() -> Vec<Agent> {
    vec![
        roster_agent(
            "John",
            "Smith",
            "john@example.com",
            "+1-555-123-4567",
            *NOON,
        ),
        roster_agent(
            "Jane",
            "Brown",
            "jane@example.org",
            "+1-555-987-6543",
            *NOON + Duration::hours(1),
        ),
        roster_agent(
            "Alice",
            "Jones",
            "alice@example.net",
            "0412 345 678",
            *NOON + Duration::hours(2),
        ),
    ]
}

#[rstest]
fn empty_store_yields_an_empty_first_page() {
    let result = run_search(
        Vec::new(),
        &AgentSearchParams::new(),
        &SearchDefaults::default(),
    );

    assert!(result.data.is_empty());
    assert_eq!(result.pagination.page, 1);
    assert_eq!(result.pagination.limit, DEFAULT_PAGE_SIZE);
    assert_eq!(result.pagination.total, 0);
    assert_eq!(result.pagination.total_pages, 0);
}

#[rstest]
fn default_page_size_slices_newest_first() {
    let first_page = run_search(
        staggered_roster(),
        &AgentSearchParams::new(),
        &SearchDefaults::default(),
    );

    assert_eq!(first_page.data.len(), 2);
    assert_eq!(
        first_page.data.first().map(Agent::first_name),
        Some("Alice")
    );
    assert_eq!(first_page.data.get(1).map(Agent::first_name), Some("Jane"));
    assert_eq!(first_page.pagination.total, 3);
    assert_eq!(first_page.pagination.total_pages, 2);

    let second_page = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_page(2).with_limit(2),
        &SearchDefaults::default(),
    );

    assert_eq!(second_page.data.len(), 1);
    assert_eq!(second_page.data.first().map(Agent::first_name), Some("John"));
    assert_eq!(second_page.pagination.total, 3);
}

#[rstest]
#[case("john")]
#[case("JOHN")]
#[case("Joh")]
fn text_filter_matches_names_case_insensitively(#[case] needle: &str) {
    let result = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_search(needle),
        &SearchDefaults::default(),
    );

    assert_eq!(result.pagination.total, 1);
    assert_eq!(result.data.first().map(Agent::first_name), Some("John"));
}

#[rstest]
fn text_filter_matches_email_and_phone_substrings() {
    let by_email = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_search("example.org"),
        &SearchDefaults::default(),
    );
    assert_eq!(by_email.data.first().map(Agent::first_name), Some("Jane"));
    assert_eq!(by_email.pagination.total, 1);

    let by_phone = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_search("555-987"),
        &SearchDefaults::default(),
    );
    assert_eq!(by_phone.data.first().map(Agent::first_name), Some("Jane"));
    assert_eq!(by_phone.pagination.total, 1);
}

#[rstest]
fn empty_search_string_matches_everything() {
    let result = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_search(""),
        &SearchDefaults::default(),
    );

    assert_eq!(result.pagination.total, 3);
}

#[rstest]
fn date_bounds_cover_whole_calendar_days() {
    let roster = vec![
        roster_agent(
            "Early",
            "Bird",
            "early@example.com",
            "1234567",
            instant("2024-03-15T00:00:00Z"),
        ),
        roster_agent(
            "Late",
            "Owl",
            "late@example.com",
            "7654321",
            instant("2024-03-15T23:59:59.999Z"),
        ),
    ];

    let after_tomorrow = run_search(
        roster.clone(),
        &AgentSearchParams::new().with_created_from("2024-03-16"),
        &SearchDefaults::default(),
    );
    assert_eq!(after_tomorrow.pagination.total, 0);

    let before_yesterday = run_search(
        roster.clone(),
        &AgentSearchParams::new().with_created_to("2024-03-14"),
        &SearchDefaults::default(),
    );
    assert_eq!(before_yesterday.pagination.total, 0);

    let exact_day = run_search(
        roster,
        &AgentSearchParams::new()
            .with_created_from("2024-03-15")
            .with_created_to("2024-03-15"),
        &SearchDefaults::default(),
    );
    assert_eq!(exact_day.pagination.total, 2);
}

#[rstest]
#[case("not-a-date")]
#[case("2024-13-40")]
#[case("15/03/2024")]
fn unparseable_date_bounds_match_nothing(#[case] bound: &str) {
    let from = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_created_from(bound),
        &SearchDefaults::default(),
    );
    assert_eq!(from.pagination.total, 0);
    assert!(from.data.is_empty());

    let to = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_created_to(bound),
        &SearchDefaults::default(),
    );
    assert_eq!(to.pagination.total, 0);
}

#[rstest]
fn blank_date_bounds_are_ignored() {
    let result = run_search(
        staggered_roster(),
        &AgentSearchParams::new()
            .with_created_from("   ")
            .with_created_to(""),
        &SearchDefaults::default(),
    );

    assert_eq!(result.pagination.total, 3);
}

#[rstest]
#[case(-1, -1)]
#[case(0, 0)]
fn non_positive_page_and_limit_fall_back_to_defaults(#[case] page: i64, #[case] limit: i64) {
    let result = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_page(page).with_limit(limit),
        &SearchDefaults::default(),
    );

    assert_eq!(result.pagination.page, 1);
    assert_eq!(result.pagination.limit, DEFAULT_PAGE_SIZE);
    assert_eq!(result.data.len(), 2);
    assert_eq!(
        result.data.first().map(Agent::first_name),
        Some("Alice")
    );
}

#[rstest]
fn out_of_range_page_yields_empty_slice_with_intact_summary() {
    let result = run_search(
        staggered_roster(),
        &AgentSearchParams::new().with_page(99),
        &SearchDefaults::default(),
    );

    assert!(result.data.is_empty());
    assert_eq!(result.pagination.page, 99);
    assert_eq!(result.pagination.limit, DEFAULT_PAGE_SIZE);
    assert_eq!(result.pagination.total, 3);
    assert_eq!(result.pagination.total_pages, 2);
}

#[rstest]
fn configured_page_size_replaces_the_stock_default() {
    let result = run_search(
        staggered_roster(),
        &AgentSearchParams::new(),
        &SearchDefaults { page_size: 5 },
    );

    assert_eq!(result.pagination.limit, 5);
    assert_eq!(result.data.len(), 3);
    assert_eq!(result.pagination.total_pages, 1);
}

#[rstest]
fn total_pages_rounds_up() {
    let mut roster = staggered_roster();
    roster.extend(vec![
        roster_agent(
            "Bob",
            "White",
            "bob@example.com",
            "1112223334",
            *NOON + Duration::hours(3),
        ),
        roster_agent(
            "Carol",
            "Green",
            "carol@example.com",
            "5556667778",
            *NOON + Duration::hours(4),
        ),
    ]);

    let result = run_search(
        roster,
        &AgentSearchParams::new().with_limit(2),
        &SearchDefaults::default(),
    );

    assert_eq!(result.pagination.total, 5);
    assert_eq!(result.pagination.total_pages, 3);
}
