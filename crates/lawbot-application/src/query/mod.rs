//! Guidance query flow.
//!
//! - `form`: editable form state behind the query screen
//! - `flow`: the `Idle → Submitting → Succeeded/Failed` state machine

mod flow;
mod form;

pub use flow::{FlowState, QueryFlow};
pub use form::QueryForm;
