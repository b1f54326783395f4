//! Session state and its read-only view.

use lawbot_core::user::UserProfile;
use tokio::sync::watch;

/// Authentication state of the app instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The startup probe has not answered yet.
    #[default]
    Resolving,
    /// No user is logged in.
    Anonymous,
    /// A user is logged in.
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Read-only view of the session, cheap to clone and pass to every view.
///
/// Only [`SessionStore`](super::SessionStore) can change what a handle sees.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    receiver: watch::Receiver<SessionState>,
}

impl SessionHandle {
    pub(crate) fn new(receiver: watch::Receiver<SessionState>) -> Self {
        Self { receiver }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.receiver.borrow().clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.receiver.borrow().user().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.receiver.borrow().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.receiver.borrow().is_authenticated()
    }

    /// Waits until the startup probe has resolved and returns the state.
    ///
    /// Returns the last known state if the store has been dropped.
    pub async fn wait_resolved(&self) -> SessionState {
        let mut receiver = self.receiver.clone();
        let resolved = receiver
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());

        match resolved {
            Ok(state) => state,
            Err(_) => receiver.borrow().clone(),
        }
    }

    /// Waits for the next state change. Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<SessionState> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
