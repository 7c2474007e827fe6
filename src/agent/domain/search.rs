//! Search, filtering, ordering, and pagination over agent records.
//!
//! The pipeline runs in a fixed order: text filter, lower creation-date
//! bound, upper creation-date bound, newest-first sort, page slice. Date
//! bounds arrive as raw strings because the query layer cannot rule out
//! malformed input; the policy for those is documented on [`run_search`].

use super::Agent;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Page number used when a request omits its own or supplies a non-positive
/// one.
const FIRST_PAGE: usize = 1;

/// Page size applied when a store is not configured with its own default.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Tunable defaults for the search pipeline.
///
/// Deployments adjust the default page size here instead of patching the
/// pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefaults {
    /// Page size applied when a request omits `limit` or supplies a
    /// non-positive one. Values below one are treated as one.
    pub page_size: usize,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query descriptor for a roster search.
///
/// Constructed per request, either through the builder methods or by
/// deserialising query parameters. An empty descriptor matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentSearchParams {
    search: Option<String>,
    created_from: Option<String>,
    created_to: Option<String>,
    page: Option<i64>,
    limit: Option<i64>,
}

impl AgentSearchParams {
    /// Creates an empty descriptor matching every record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search: None,
            created_from: None,
            created_to: None,
            page: None,
            limit: None,
        }
    }

    /// Sets the free-text filter.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the inclusive lower creation-date bound (ISO `YYYY-MM-DD`).
    #[must_use]
    pub fn with_created_from(mut self, created_from: impl Into<String>) -> Self {
        self.created_from = Some(created_from.into());
        self
    }

    /// Sets the inclusive upper creation-date bound (ISO `YYYY-MM-DD`).
    #[must_use]
    pub fn with_created_to(mut self, created_to: impl Into<String>) -> Self {
        self.created_to = Some(created_to.into());
        self
    }

    /// Sets the 1-based page number.
    #[must_use]
    pub const fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Pagination summary returned alongside each result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Effective 1-based page number after clamping.
    pub page: usize,
    /// Effective page size after clamping.
    pub limit: usize,
    /// Matching records before the page slice.
    pub total: usize,
    /// Total pages at this page size; zero when nothing matched.
    pub total_pages: usize,
}

/// One page of matching records plus its pagination summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    /// Records on the requested page, newest first.
    pub data: Vec<T>,
    /// Pagination summary.
    pub pagination: PageInfo,
}

/// Runs the search pipeline over a snapshot of the record set.
///
/// Filters run before the sort and the page slice: text match first, then
/// the creation-date bounds. The text filter matches `first_name`,
/// `last_name`, and `email` case-insensitively and `mobile_number` verbatim.
///
/// A date bound that is blank after trimming is ignored; a non-blank bound
/// that does not parse as an ISO `YYYY-MM-DD` date matches no records at
/// all. Out-of-range pages yield an empty slice with a well-formed summary.
#[must_use]
pub fn run_search(
    records: Vec<Agent>,
    params: &AgentSearchParams,
    defaults: &SearchDefaults,
) -> PaginatedResult<Agent> {
    let mut matches = records;

    if let Some(needle) = params.search.as_deref().filter(|value| !value.is_empty()) {
        let folded = needle.to_lowercase();
        matches.retain(|agent| matches_text(agent, needle, &folded));
    }

    if let Some(raw) = bound_value(params.created_from.as_deref()) {
        match day_start(raw) {
            Some(from) => matches.retain(|agent| agent.created_at() >= from),
            None => matches.clear(),
        }
    }

    if let Some(raw) = bound_value(params.created_to.as_deref()) {
        match day_end(raw) {
            Some(to) => matches.retain(|agent| agent.created_at() <= to),
            None => matches.clear(),
        }
    }

    matches.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

    let total = matches.len();
    let page = effective(params.page, FIRST_PAGE);
    let limit = effective(params.limit, defaults.page_size);
    let total_pages = total.div_ceil(limit);
    let offset = page.saturating_sub(1).saturating_mul(limit);
    let data = matches.into_iter().skip(offset).take(limit).collect();

    PaginatedResult {
        data,
        pagination: PageInfo {
            page,
            limit,
            total,
            total_pages,
        },
    }
}

/// Case-insensitive match on name and email, verbatim match on the phone
/// number.
fn matches_text(agent: &Agent, verbatim: &str, folded: &str) -> bool {
    agent.first_name().to_lowercase().contains(folded)
        || agent.last_name().to_lowercase().contains(folded)
        || agent.email().to_lowercase().contains(folded)
        || agent.mobile_number().contains(verbatim)
}

/// Treats blank date-bound values as absent.
fn bound_value(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// First instant of the named calendar day, or `None` when the value is not
/// an ISO date.
fn day_start(raw: &str) -> Option<DateTime<Utc>> {
    let date: NaiveDate = raw.parse().ok()?;
    Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Last millisecond of the named calendar day, or `None` when the value is
/// not an ISO date.
fn day_end(raw: &str) -> Option<DateTime<Utc>> {
    let date: NaiveDate = raw.parse().ok()?;
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    Some(Utc.from_utc_datetime(&date.and_time(end)))
}

/// Effective pagination value: the supplied one when positive, otherwise the
/// default, floored at one.
fn effective(requested: Option<i64>, default: usize) -> usize {
    requested
        .and_then(|value| usize::try_from(value).ok())
        .filter(|&value| value > 0)
        .unwrap_or(default)
        .max(1)
}
