//! Session management.
//!
//! # Module Structure
//!
//! - `state`: `SessionState` and the read-only `SessionHandle` given to views
//! - `store`: `SessionStore`, the only writer of session state

mod state;
mod store;

// Re-export public API
pub use state::{SessionHandle, SessionState};
pub use store::{LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE, SessionStore};
