//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: the authenticated user profile and its opaque identity
//! - `credentials`: login credentials and the signup request body
//!
//! # Usage
//!
//! ```ignore
//! use lawbot_core::user::{Credentials, SignupRequest, UserId, UserProfile};
//! ```

mod credentials;
mod model;

// Re-export public API
pub use credentials::{Credentials, SignupRequest};
pub use model::{UserId, UserProfile};
