//! Application layer of the Lawbot client.
//!
//! Wires the domain types of `lawbot-core` to a [`BackendGateway`] and exposes
//! the state that views render: the session, the query flow and route
//! decisions.
//!
//! [`BackendGateway`]: lawbot_core::gateway::BackendGateway

pub mod navigation;
pub mod query;
pub mod report_service;
pub mod session;

#[cfg(test)]
mod mock_gateway;

pub use navigation::{GuardOutcome, NavigationGuard, Route, guard};
pub use query::{FlowState, QueryFlow, QueryForm};
pub use report_service::ReportService;
pub use session::{SessionHandle, SessionState, SessionStore};
