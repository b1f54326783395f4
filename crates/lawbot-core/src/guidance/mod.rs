//! Guidance domain module.
//!
//! Turns whatever the backend returned for a query into one renderable
//! [`GuidanceResult`].
//!
//! # Module Structure
//!
//! - `response`: the raw, fully optional wire shape
//! - `result`: the normalized view model and the normalization function
//! - `resource`: idempotent resolution of audio/PDF locations
//! - `links`: external search and maps links built from the search key

mod links;
mod resource;
mod response;
mod result;

// Re-export public API
pub use links::LawyerSearchLinks;
pub use resource::resolve_resource_url;
pub use response::GuidanceResponse;
pub use result::{GuidanceResult, normalize_response};
