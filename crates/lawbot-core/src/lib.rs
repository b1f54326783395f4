//! Domain layer of the Lawbot client.
//!
//! Holds the models shared by every front end (user, query, guidance), the
//! error type, the client configuration and the [`gateway::BackendGateway`]
//! contract. Nothing in this crate talks to the network.

pub mod config;
pub mod error;
pub mod gateway;
pub mod guidance;
pub mod query;
pub mod user;

// Re-export common types
pub use config::ClientConfig;
pub use error::{LawbotError, Result};
pub use gateway::BackendGateway;
