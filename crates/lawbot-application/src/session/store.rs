use super::state::{SessionHandle, SessionState};
use lawbot_core::error::{LawbotError, Result};
use lawbot_core::gateway::BackendGateway;
use lawbot_core::user::{Credentials, SignupRequest, UserProfile};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// Shown when a login is rejected without a backend message.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";
/// Shown when a signup is rejected without a backend message.
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed";

/// Owner of the app's authentication state.
///
/// `SessionStore` is responsible for:
/// - Probing the backend once at startup (`initialize`)
/// - Logging in, signing up and logging out
/// - Publishing the resulting [`SessionState`] to every [`SessionHandle`]
///
/// Mutating operations share one operation slot. `login` and `signup` fail
/// with `Busy` while another operation is in flight; `initialize` and
/// `logout` wait for the slot instead.
pub struct SessionStore {
    gateway: Arc<dyn BackendGateway>,
    state: watch::Sender<SessionState>,
    operation: Mutex<()>,
}

impl SessionStore {
    /// Creates a store in the `Resolving` state.
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        let (state, _) = watch::channel(SessionState::Resolving);
        Self {
            gateway,
            state,
            operation: Mutex::new(()),
        }
    }

    /// Returns a read-only handle for views.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(self.state.subscribe())
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.borrow().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Probes the backend for an existing session.
    ///
    /// Never fails: any error resolves to `Anonymous`.
    pub async fn initialize(&self) -> SessionState {
        let _slot = self.operation.lock().await;

        let next = match self.gateway.current_user().await {
            Ok(user) => {
                tracing::info!("[SessionStore] Restored session for user {}", user.id);
                SessionState::Authenticated(user)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::debug!("[SessionStore] No active session");
                SessionState::Anonymous
            }
            Err(e) => {
                tracing::warn!("[SessionStore] Session probe failed: {}", e);
                SessionState::Anonymous
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    /// Logs in and adopts the returned user.
    ///
    /// On failure the current state is left untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile> {
        let _slot = self
            .operation
            .try_lock()
            .map_err(|_| LawbotError::busy("login"))?;

        tracing::debug!("[SessionStore] Logging in {}", credentials.email);

        match self.gateway.login(credentials).await {
            Ok(Some(user)) => {
                tracing::info!("[SessionStore] Logged in as user {}", user.id);
                self.state.send_replace(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Ok(None) => {
                tracing::warn!("[SessionStore] Login response carried no user");
                Err(LawbotError::authentication(LOGIN_FAILED_MESSAGE))
            }
            Err(e) => Err(auth_error(e, LOGIN_FAILED_MESSAGE, "Login")),
        }
    }

    /// Registers a new account. Does not log the user in.
    pub async fn signup(&self, request: &SignupRequest) -> Result<()> {
        let _slot = self
            .operation
            .try_lock()
            .map_err(|_| LawbotError::busy("signup"))?;

        tracing::debug!("[SessionStore] Signing up {}", request.email);

        self.gateway
            .signup(request)
            .await
            .map_err(|e| auth_error(e, SIGNUP_FAILED_MESSAGE, "Signup"))?;

        tracing::info!("[SessionStore] Account created for {}", request.email);
        Ok(())
    }

    /// Ends the session on the backend, then clears local state no matter
    /// what the backend answered.
    pub async fn logout(&self) {
        let _slot = self.operation.lock().await;

        if let Err(e) = self.gateway.logout().await {
            tracing::warn!("[SessionStore] Logout request failed, clearing locally: {}", e);
        }

        self.state.send_replace(SessionState::Anonymous);
        tracing::info!("[SessionStore] Session cleared");
    }
}

/// Maps a backend rejection to an authentication error carrying the
/// backend's message or `fallback`. Transport errors pass through.
fn auth_error(err: LawbotError, fallback: &str, operation: &str) -> LawbotError {
    match err {
        LawbotError::Rejected { status, message } => {
            tracing::debug!("[SessionStore] {} rejected with status {}", operation, status);
            LawbotError::authentication(message.unwrap_or_else(|| fallback.to_string()))
        }
        other => {
            tracing::warn!("[SessionStore] {} failed: {}", operation, other);
            other
        }
    }
}
