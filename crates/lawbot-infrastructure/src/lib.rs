//! Infrastructure layer of the Lawbot client: the HTTP gateway, tracing
//! setup and local file storage.

pub mod http_gateway;
pub mod logging;
pub mod paths;
pub mod report_storage;

pub use crate::http_gateway::HttpGateway;
pub use crate::paths::LawbotPaths;
pub use crate::report_storage::ReportStorage;
