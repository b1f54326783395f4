//! In-memory `BackendGateway` for unit tests.

use async_trait::async_trait;
use lawbot_core::error::{LawbotError, Result};
use lawbot_core::gateway::BackendGateway;
use lawbot_core::guidance::GuidanceResponse;
use lawbot_core::query::QueryRequest;
use lawbot_core::user::{Credentials, SignupRequest, UserId, UserProfile};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

pub(crate) const BASE: &str = "http://localhost:5000";

pub(crate) fn sample_user() -> UserProfile {
    UserProfile {
        id: UserId::new("1"),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        phone: None,
        gender: None,
        city: Some("Chennai".to_string()),
        state: Some("Tamil Nadu".to_string()),
        country: Some("India".to_string()),
    }
}

/// Scripted gateway that records every call.
///
/// When built with [`MockGateway::gated`], each call waits for a permit so
/// tests can observe in-flight states.
pub(crate) struct MockGateway {
    pub probe: Mutex<Result<UserProfile>>,
    pub login: Mutex<Result<Option<UserProfile>>>,
    pub signup: Mutex<Result<()>>,
    pub logout: Mutex<Result<()>>,
    pub query: Mutex<Result<GuidanceResponse>>,
    pub resource: Mutex<Result<Vec<u8>>>,
    pub calls: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<QueryRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            probe: Mutex::new(Err(LawbotError::rejected(401, None))),
            login: Mutex::new(Ok(Some(sample_user()))),
            signup: Mutex::new(Ok(())),
            logout: Mutex::new(Ok(())),
            query: Mutex::new(Ok(GuidanceResponse {
                response: Some("File a written complaint.".to_string()),
                ..GuidanceResponse::default()
            })),
            resource: Mutex::new(Ok(b"%PDF-1.4".to_vec())),
            calls: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// A gateway whose calls each wait for one permit on the returned semaphore.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let mut gateway = Self::new();
        gateway.gate = Some(gate.clone());
        (gateway, gate)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

#[async_trait]
impl BackendGateway for MockGateway {
    fn base_origin(&self) -> &str {
        BASE
    }

    async fn current_user(&self) -> Result<UserProfile> {
        self.enter("me").await;
        self.probe.lock().unwrap().clone()
    }

    async fn login(&self, _credentials: &Credentials) -> Result<Option<UserProfile>> {
        self.enter("login").await;
        self.login.lock().unwrap().clone()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<()> {
        self.enter("signup").await;
        self.signup.lock().unwrap().clone()
    }

    async fn logout(&self) -> Result<()> {
        self.enter("logout").await;
        self.logout.lock().unwrap().clone()
    }

    async fn submit_query(&self, request: &QueryRequest) -> Result<GuidanceResponse> {
        self.enter(request.path()).await;
        self.queries.lock().unwrap().push(request.clone());
        self.query.lock().unwrap().clone()
    }

    async fn fetch_resource(&self, url: &str) -> Result<Vec<u8>> {
        self.enter(&format!("GET {}", url)).await;
        self.resource.lock().unwrap().clone()
    }
}
