//! Backend gateway trait.
//!
//! Every network call of the client goes through one [`BackendGateway`], so
//! the origin and the credential policy live in a single place.

use crate::error::Result;
use crate::guidance::GuidanceResponse;
use crate::query::QueryRequest;
use crate::user::{Credentials, SignupRequest, UserProfile};
use async_trait::async_trait;

pub const AUTH_ME_PATH: &str = "/auth/me";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_SIGNUP_PATH: &str = "/auth/signup";
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout";

/// The HTTP contract of the Lawbot backend.
///
/// # Error contract
///
/// Implementations report a non-2xx answer as [`LawbotError::Rejected`] with
/// the body's `error` field when present, and network, timeout or decoding
/// failures as [`LawbotError::Transport`]. They never retry.
///
/// [`LawbotError::Rejected`]: crate::error::LawbotError::Rejected
/// [`LawbotError::Transport`]: crate::error::LawbotError::Transport
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Origin every relative resource path is resolved against.
    fn base_origin(&self) -> &str;

    /// Session probe (`GET /auth/me`), relying on the session cookie.
    async fn current_user(&self) -> Result<UserProfile>;

    /// `POST /auth/login`. Returns the `user` object of the response, which
    /// a misbehaving backend may omit.
    async fn login(&self, credentials: &Credentials) -> Result<Option<UserProfile>>;

    /// `POST /auth/signup`. Success does not log the user in.
    async fn signup(&self, request: &SignupRequest) -> Result<()>;

    /// `GET /auth/logout`.
    async fn logout(&self) -> Result<()>;

    /// Sends a validated query to the endpoint of its variant.
    async fn submit_query(&self, request: &QueryRequest) -> Result<GuidanceResponse>;

    /// Downloads a resource (report PDF, audio) by absolute URL.
    async fn fetch_resource(&self, url: &str) -> Result<Vec<u8>>;
}
