//! Route gating on session state.

use crate::session::{SessionHandle, SessionState};
use serde::{Deserialize, Serialize};

/// Views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Profile,
    Login,
    Signup,
}

impl Route {
    /// Where a successful login lands.
    pub const AFTER_LOGIN: Route = Route::Home;
    /// Where a successful signup lands. Signup does not log the user in.
    pub const AFTER_SIGNUP: Route = Route::Login;
    pub const AFTER_LOGOUT: Route = Route::Login;

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Home | Self::Profile)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/profile" => Some(Self::Profile),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            _ => None,
        }
    }
}

/// What a view should do for a requested route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session probe is still pending; show a placeholder.
    Loading,
    Render(Route),
    Redirect(Route),
}

/// Decides a route for a session state.
///
/// Public routes always render. Protected routes never redirect while the
/// session is resolving.
pub fn guard(state: &SessionState, route: Route) -> GuardOutcome {
    if !route.requires_session() {
        return GuardOutcome::Render(route);
    }
    match state {
        SessionState::Resolving => GuardOutcome::Loading,
        SessionState::Authenticated(_) => GuardOutcome::Render(route),
        SessionState::Anonymous => GuardOutcome::Redirect(Route::Login),
    }
}

/// [`guard`] bound to a live session.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    session: SessionHandle,
}

impl NavigationGuard {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Decision for the session as it is right now.
    pub fn decide(&self, route: Route) -> GuardOutcome {
        let outcome = guard(&self.session.state(), route);
        if let GuardOutcome::Redirect(target) = outcome {
            tracing::debug!(
                "[NavigationGuard] {} requires a session, redirecting to {}",
                route.path(),
                target.path()
            );
        }
        outcome
    }

    /// Waits for the session probe, then decides. Never yields `Loading`:
    /// a store dropped before resolving counts as no session.
    pub async fn resolve(&self, route: Route) -> GuardOutcome {
        let state = match self.session.wait_resolved().await {
            SessionState::Resolving => SessionState::Anonymous,
            state => state,
        };
        guard(&state, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_gateway::{MockGateway, sample_user};
    use crate::session::SessionStore;
    use std::sync::Arc;

    #[test]
    fn test_public_routes_always_render() {
        for state in [
            SessionState::Resolving,
            SessionState::Anonymous,
            SessionState::Authenticated(sample_user()),
        ] {
            assert_eq!(guard(&state, Route::Login), GuardOutcome::Render(Route::Login));
            assert_eq!(guard(&state, Route::Signup), GuardOutcome::Render(Route::Signup));
        }
    }

    #[test]
    fn test_protected_routes() {
        for route in [Route::Home, Route::Profile] {
            assert_eq!(guard(&SessionState::Resolving, route), GuardOutcome::Loading);
            assert_eq!(
                guard(&SessionState::Anonymous, route),
                GuardOutcome::Redirect(Route::Login)
            );
            assert_eq!(
                guard(&SessionState::Authenticated(sample_user()), route),
                GuardOutcome::Render(route)
            );
        }
    }

    #[test]
    fn test_paths() {
        for route in [Route::Home, Route::Profile, Route::Login, Route::Signup] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/profile/"), Some(Route::Profile));
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_loading_until_probe_resolves() {
        let (gateway, gate) = MockGateway::gated();
        let store = Arc::new(SessionStore::new(Arc::new(gateway)));
        let guard = NavigationGuard::new(store.handle());

        let probe = {
            let store = store.clone();
            tokio::spawn(async move { store.initialize().await })
        };
        assert_eq!(guard.decide(Route::Home), GuardOutcome::Loading);

        let pending = {
            let guard = guard.clone();
            tokio::spawn(async move { guard.resolve(Route::Profile).await })
        };

        gate.add_permits(1);
        probe.await.unwrap();

        assert_eq!(pending.await.unwrap(), GuardOutcome::Redirect(Route::Login));
        assert_eq!(guard.decide(Route::Home), GuardOutcome::Redirect(Route::Login));
    }

    #[tokio::test]
    async fn test_renders_after_login() {
        let store = SessionStore::new(Arc::new(MockGateway::new()));
        let guard = NavigationGuard::new(store.handle());
        store.initialize().await;

        store
            .login(&lawbot_core::user::Credentials::new("a", "b"))
            .await
            .unwrap();

        assert_eq!(
            guard.resolve(Route::AFTER_LOGIN).await,
            GuardOutcome::Render(Route::Home)
        );
    }

    #[tokio::test]
    async fn test_dropped_store_resolves_as_anonymous() {
        let store = SessionStore::new(Arc::new(MockGateway::new()));
        let guard = NavigationGuard::new(store.handle());
        drop(store);

        assert_eq!(
            guard.resolve(Route::Home).await,
            GuardOutcome::Redirect(Route::Login)
        );
        assert_eq!(
            guard.resolve(Route::Signup).await,
            GuardOutcome::Render(Route::Signup)
        );
    }
}
