use lawbot_core::error::{LawbotError, Result};
use lawbot_core::gateway::BackendGateway;
use lawbot_core::guidance::{GuidanceResult, normalize_response};
use lawbot_core::query::QuerySubmission;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use uuid::Uuid;

/// Where a query screen currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Succeeded(GuidanceResult),
    /// Holds the message the user should see.
    Failed { message: String },
}

impl FlowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn result(&self) -> Option<&GuidanceResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// Submits guidance queries for one view.
///
/// One request may be in flight at a time. Empty submissions are rejected
/// before any network call and leave the state untouched. Once the view is
/// gone, [`QueryFlow::detach`] makes a late response get dropped instead of
/// applied. Dropping a `submit` future mid-request returns the flow to
/// `Idle`.
pub struct QueryFlow {
    gateway: Arc<dyn BackendGateway>,
    state: watch::Sender<FlowState>,
    attached: AtomicBool,
}

impl QueryFlow {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        let (state, _) = watch::channel(FlowState::Idle);
        Self {
            gateway,
            state,
            attached: AtomicBool::new(true),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    /// Receiver for rendering state changes.
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    /// Back to `Idle`, e.g. when the user clears the screen.
    /// Has no effect while a request is in flight.
    pub fn reset(&self) {
        self.state.send_if_modified(|state| {
            if state.is_submitting() || *state == FlowState::Idle {
                false
            } else {
                *state = FlowState::Idle;
                true
            }
        });
    }

    /// Drops interest in any pending response.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    /// Validates and sends a submission, then normalizes the response.
    pub async fn submit(&self, submission: QuerySubmission) -> Result<GuidanceResult> {
        if !self.is_attached() {
            return Err(LawbotError::detached("query submission"));
        }

        let request = submission.into_request()?;

        let mut started = false;
        self.state.send_if_modified(|state| {
            if state.is_submitting() {
                return false;
            }
            *state = FlowState::Submitting;
            started = true;
            true
        });
        if !started {
            return Err(LawbotError::busy("query submission"));
        }
        let in_flight = InFlight::new(&self.state);

        let submission_id = Uuid::new_v4();
        let location = request.location().to_string();
        tracing::info!(
            "[QueryFlow] Submitting {} to {} (language: {}, location: {})",
            submission_id,
            request.path(),
            request.language(),
            location
        );

        let outcome = self
            .gateway
            .submit_query(&request)
            .await
            .and_then(|raw| normalize_response(raw, self.gateway.base_origin(), &location));

        if !self.is_attached() {
            tracing::debug!(
                "[QueryFlow] View detached, dropping response for {}",
                submission_id
            );
            in_flight.settle(FlowState::Idle);
            return Err(LawbotError::detached("query submission"));
        }

        match outcome {
            Ok(result) => {
                tracing::info!("[QueryFlow] Guidance received for {}", submission_id);
                in_flight.settle(FlowState::Succeeded(result.clone()));
                Ok(result)
            }
            Err(e) => {
                tracing::error!("[QueryFlow] Submission {} failed: {}", submission_id, e);
                in_flight.settle(FlowState::Failed {
                    message: e.user_message(),
                });
                Err(e)
            }
        }
    }
}

/// Owns the `Submitting` state of one submission.
///
/// Dropping it unsettled (the submit future was dropped mid-request) puts
/// the flow back to `Idle`.
struct InFlight<'a> {
    state: &'a watch::Sender<FlowState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<FlowState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, next: FlowState) {
        self.settled = true;
        self.state.send_replace(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::debug!("[QueryFlow] Submission abandoned, returning to idle");
        self.state.send_if_modified(|state| {
            if state.is_submitting() {
                *state = FlowState::Idle;
                true
            } else {
                false
            }
        });
    }
}
