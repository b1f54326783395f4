//! Query domain module.
//!
//! # Module Structure
//!
//! - `language`: response languages
//! - `catalog`: states and cities offered by the jurisdiction pickers
//! - `jurisdiction`: the state/city hint with its reset rule
//! - `attachment`: PDF/plain-text documents for upload
//! - `submission`: `QuerySubmission` and the `QueryRequest` variants

pub mod catalog;

mod attachment;
mod jurisdiction;
mod language;
mod submission;

// Re-export public API
pub use attachment::{DocumentAttachment, DocumentKind};
pub use jurisdiction::Jurisdiction;
pub use language::Language;
pub use submission::{
    DocumentQuery, EMPTY_SUBMISSION_MESSAGE, QUERY_PATH, QueryRequest, QuerySubmission,
    TextQuery, UPLOAD_AND_ANALYZE_PATH,
};
