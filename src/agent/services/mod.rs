//! Application services for agent roster orchestration.

mod roster;

pub use roster::{
    AgentRosterError, AgentRosterResult, AgentRosterService, CreateAgentRequest,
    UpdateAgentRequest,
};
