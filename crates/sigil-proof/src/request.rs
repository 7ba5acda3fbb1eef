//! # Proof Request State Machine
//!
//! Models the lifecycle of one submission attempt with explicit states
//! and an ordered transition log.
//!
//! ## States
//!
//! ```text
//! Idle ──▶ Preparing ──▶ AwaitingProof ──▶ Succeeded ──▶ Preparing (next request)
//!              │              │
//!              │              ├──▶ Failed ──▶ Idle
//!              │              │
//!              │              └──▶ Idle (cancel)
//!              │
//!              └──▶ Idle (validation failure)
//! ```
//!
//! A new request may begin from `Idle` or `Succeeded`; beginning while a
//! request is in flight is an error, never an implicit cancellation.
//! Validation happens in `Preparing`: a missing identity, empty group, or
//! empty signal sends the machine back to `Idle` with the reason logged.
//! Cancellation retires the request identifier, so a completion or
//! failure that arrives for a retired identifier is discarded silently.
//!
//! The group snapshot is captured into the `ProofRequest` at begin:
//! membership refreshes that land while a proof is in flight do not
//! retroactively affect that request.

use serde::{Deserialize, Serialize};
use sigil_core::Timestamp;
use sigil_crypto::{ContextId, Group, IdentitySecret, Signal, SignalError};
use thiserror::Error;
use uuid::Uuid;

use crate::bundle::ProofBundle;
use crate::traits::Prover;

// ─── Phase ───────────────────────────────────────────────────────────

/// The lifecycle phase of the request machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestPhase {
    /// No request in flight.
    Idle,
    /// A submission intent arrived and is being validated.
    Preparing,
    /// A request has begun and awaits its proof.
    AwaitingProof,
    /// The last request produced a bundle.
    Succeeded,
    /// Transient: recorded in the transition log on failure, then the
    /// machine returns to `Idle`.
    Failed,
}

impl RequestPhase {
    /// Whether a request is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::AwaitingProof)
    }
}

impl std::fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "IDLE",
            Self::Preparing => "PREPARING",
            Self::AwaitingProof => "AWAITING_PROOF",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur while driving a proof request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// No identity has been configured on the machine.
    #[error("no identity configured; generate or restore one first")]
    NoIdentity,

    /// The target group has no members.
    #[error("cannot prove membership in an empty group")]
    EmptyGroup,

    /// The signal encodes to the zero element.
    #[error("signal is empty")]
    EmptySignal,

    /// Another request is already awaiting its proof.
    #[error("request {id} is already in flight; cancel it or wait for completion")]
    RequestInFlight {
        /// The in-flight request.
        id: RequestId,
    },

    /// The proving backend failed or the witness could not be built.
    #[error("proof generation failed: {reason}")]
    ProofGenerationFailed {
        /// Backend or witness failure detail.
        reason: String,
    },

    /// The in-flight request exceeded its deadline.
    #[error("proof request timed out after {elapsed_secs}s")]
    Timeout {
        /// Seconds elapsed since the request began.
        elapsed_secs: i64,
    },

    /// The signal could not be encoded.
    #[error(transparent)]
    Signal(#[from] SignalError),
}

// ─── Identifiers and records ─────────────────────────────────────────

/// Opaque identifier of one request attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of one phase transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Phase before the transition.
    pub from: RequestPhase,
    /// Phase after the transition.
    pub to: RequestPhase,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// Why it occurred.
    pub reason: String,
}

// ─── ProofRequest ────────────────────────────────────────────────────

/// One submission attempt, immutable once dispatched.
///
/// Captures the identity, a group snapshot, the encoded signal, and the
/// context at begin time. Not serializable: it carries the identity
/// secret.
#[derive(Debug, Clone)]
pub struct ProofRequest {
    id: RequestId,
    identity: IdentitySecret,
    group: Group,
    signal: Signal,
    context: ContextId,
    started_at: Timestamp,
}

impl ProofRequest {
    /// Capture a request snapshot.
    pub fn new(
        identity: IdentitySecret,
        group: Group,
        signal: Signal,
        context: ContextId,
    ) -> Self {
        Self {
            id: RequestId::new(),
            identity,
            group,
            signal,
            context,
            started_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn identity(&self) -> &IdentitySecret {
        &self.identity
    }

    /// The group snapshot this request proves against.
    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    pub fn context(&self) -> &ContextId {
        &self.context
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Run the prover and package its output into a bundle.
    ///
    /// # Errors
    ///
    /// Returns `ProofGenerationFailed` when the backend errors or when
    /// its claimed root does not match the group snapshot's.
    pub fn dispatch(&self, prover: &dyn Prover) -> Result<ProofBundle, RequestError> {
        tracing::debug!(
            id = %self.id,
            depth = self.group.depth(),
            members = self.group.len(),
            "invoking prover"
        );
        let output = prover
            .prove(self)
            .map_err(|e| RequestError::ProofGenerationFailed {
                reason: e.to_string(),
            })?;
        if output.root != *self.group.root() {
            return Err(RequestError::ProofGenerationFailed {
                reason: "prover returned a root differing from the group snapshot".into(),
            });
        }
        Ok(ProofBundle {
            proof: output.proof,
            root: output.root,
            nullifier_hash: output.nullifier_hash,
            signal: self.signal.clone(),
            context: self.context.clone(),
        })
    }
}

// ─── Machine ─────────────────────────────────────────────────────────

/// The proof request lifecycle for one configured identity.
///
/// Holds no backend: the prover is injected per call, so tests and
/// callers choose the backend without touching the machine. One machine
/// per user; machines share no state.
#[derive(Debug)]
pub struct ProofRequestMachine {
    identity: Option<IdentitySecret>,
    phase: RequestPhase,
    current: Option<ProofRequest>,
    last_bundle: Option<ProofBundle>,
    timeout_secs: Option<i64>,
    transitions: Vec<TransitionRecord>,
}

impl Default for ProofRequestMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofRequestMachine {
    /// A machine with no identity configured.
    pub fn new() -> Self {
        Self {
            identity: None,
            phase: RequestPhase::Idle,
            current: None,
            last_bundle: None,
            timeout_secs: None,
            transitions: Vec::new(),
        }
    }

    /// A machine pre-configured with an identity.
    pub fn with_identity(identity: IdentitySecret) -> Self {
        let mut machine = Self::new();
        machine.identity = Some(identity);
        machine
    }

    /// Set a deadline for in-flight requests, checked by
    /// [`expire_if_overdue`](Self::expire_if_overdue).
    pub fn with_timeout_secs(mut self, secs: i64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Configure or replace the identity. An in-flight request keeps the
    /// identity it was captured with.
    pub fn set_identity(&mut self, identity: IdentitySecret) {
        self.identity = Some(identity);
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// The in-flight request, if any.
    pub fn current_request(&self) -> Option<&ProofRequest> {
        self.current.as_ref()
    }

    /// The bundle produced by the most recent successful request.
    pub fn last_bundle(&self) -> Option<&ProofBundle> {
        self.last_bundle.as_ref()
    }

    /// The ordered transition log.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    /// Begin a request.
    ///
    /// Valid from `Idle` and `Succeeded`. The machine enters `Preparing`,
    /// validates the inputs, and either advances to `AwaitingProof` with
    /// a captured `ProofRequest` or returns to `Idle` with the failure
    /// logged. A begin while a request is in flight is rejected without
    /// any transition; nothing is queued.
    ///
    /// # Errors
    ///
    /// `RequestInFlight` when a request is already awaiting its proof,
    /// `NoIdentity`, `EmptyGroup`, or `EmptySignal` on failed validation.
    pub fn begin(
        &mut self,
        group: &Group,
        signal: &Signal,
        context: &ContextId,
    ) -> Result<RequestId, RequestError> {
        if let Some(request) = &self.current {
            return Err(RequestError::RequestInFlight { id: request.id });
        }
        self.do_transition(RequestPhase::Preparing, "submission intent");
        let identity = match self.validate(group, signal) {
            Ok(identity) => identity.clone(),
            Err(err) => {
                self.do_transition(RequestPhase::Idle, &err.to_string());
                return Err(err);
            }
        };
        let request = ProofRequest::new(identity, group.clone(), signal.clone(), context.clone());
        let id = request.id;
        self.current = Some(request);
        self.do_transition(
            RequestPhase::AwaitingProof,
            &format!("request {id} begun for {context}"),
        );
        Ok(id)
    }

    fn validate(&self, group: &Group, signal: &Signal) -> Result<&IdentitySecret, RequestError> {
        let identity = self.identity.as_ref().ok_or(RequestError::NoIdentity)?;
        if group.is_empty() {
            return Err(RequestError::EmptyGroup);
        }
        if signal.element().is_zero() {
            return Err(RequestError::EmptySignal);
        }
        Ok(identity)
    }

    /// Deliver the proof bundle for request `id`.
    ///
    /// Returns the stored bundle, or `None` when `id` has been retired
    /// (cancelled or already resolved); a stale completion never disturbs
    /// the machine.
    pub fn complete(&mut self, id: RequestId, bundle: ProofBundle) -> Option<&ProofBundle> {
        match &self.current {
            Some(request) if request.id == id => {}
            _ => return None,
        }
        self.current = None;
        self.last_bundle = Some(bundle);
        self.do_transition(RequestPhase::Succeeded, &format!("request {id} completed"));
        self.last_bundle.as_ref()
    }

    /// Record a failure for request `id` and return to `Idle`.
    ///
    /// Stale identifiers are discarded silently, mirroring `complete`.
    /// A previously obtained bundle is left untouched.
    pub fn fail(&mut self, id: RequestId, reason: &str) {
        match &self.current {
            Some(request) if request.id == id => {}
            _ => return,
        }
        self.current = None;
        self.do_transition(RequestPhase::Failed, reason);
        self.do_transition(RequestPhase::Idle, &format!("request {id} failed"));
    }

    /// Cancel the in-flight request, if any, retiring its identifier.
    ///
    /// Returns the retired identifier. Idempotent: cancelling an idle
    /// machine is a no-op.
    pub fn cancel(&mut self) -> Option<RequestId> {
        let request = self.current.take()?;
        self.do_transition(
            RequestPhase::Idle,
            &format!("request {} cancelled", request.id),
        );
        Some(request.id)
    }

    /// Fail the in-flight request if it has outlived the configured
    /// deadline. Returns the timeout error when it fired; the effect on
    /// the machine is identical to any other failure.
    pub fn expire_if_overdue(&mut self, now: Timestamp) -> Option<RequestError> {
        let deadline = self.timeout_secs?;
        let request = self.current.as_ref()?;
        let elapsed_secs = now.epoch_secs() - request.started_at.epoch_secs();
        if elapsed_secs <= deadline {
            return None;
        }
        let id = request.id;
        let err = RequestError::Timeout { elapsed_secs };
        self.fail(id, &err.to_string());
        Some(err)
    }

    /// Drive a full request synchronously: begin, prove, complete.
    ///
    /// The prover is invoked exactly once. On backend failure the machine
    /// records the failure and returns to `Idle`, then the error is
    /// propagated.
    pub fn submit(
        &mut self,
        prover: &dyn Prover,
        group: &Group,
        signal: &Signal,
        context: &ContextId,
    ) -> Result<&ProofBundle, RequestError> {
        let id = self.begin(group, signal, context)?;
        let request = match &self.current {
            Some(request) => request.clone(),
            None => return Err(RequestError::NoIdentity),
        };
        match request.dispatch(prover) {
            Ok(bundle) => {
                let completed = self.complete(id, bundle).is_some();
                if !completed {
                    return Err(RequestError::ProofGenerationFailed {
                        reason: "request was retired before completion".into(),
                    });
                }
                self.last_bundle.as_ref().ok_or_else(|| {
                    RequestError::ProofGenerationFailed {
                        reason: "completed request stored no bundle".into(),
                    }
                })
            }
            Err(err) => {
                self.fail(id, &err.to_string());
                Err(err)
            }
        }
    }

    /// Record a phase transition.
    fn do_transition(&mut self, to: RequestPhase, reason: &str) {
        tracing::debug!(from = %self.phase, to = %to, reason, "request transition");
        self.transitions.push(TransitionRecord {
            from: self.phase,
            to,
            timestamp: Timestamp::now(),
            reason: reason.to_string(),
        });
        self.phase = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ProveError, ProverOutput};
    use crate::transparent::TransparentProver;

    /// A backend that always fails, for exercising the failure path.
    struct BrokenProver;

    impl Prover for BrokenProver {
        fn prove(&self, _: &ProofRequest) -> Result<ProverOutput, ProveError> {
            Err(ProveError::Backend("induced failure".into()))
        }
    }

    /// A backend that claims a root unrelated to the group snapshot.
    struct RootLyingProver;

    impl Prover for RootLyingProver {
        fn prove(&self, request: &ProofRequest) -> Result<ProverOutput, ProveError> {
            Ok(ProverOutput {
                proof: vec![0u8; 4],
                root: sigil_core::FieldElement::ZERO,
                nullifier_hash: request.identity().nullifier_hash(request.context()),
            })
        }
    }

    fn member_setup() -> (ProofRequestMachine, Group, Signal, ContextId) {
        let identity = IdentitySecret::generate();
        let group = Group::build(vec![identity.commitment()], 20).unwrap();
        let machine = ProofRequestMachine::with_identity(identity);
        let signal = Signal::encode("yes").unwrap();
        let context = ContextId::new("poll-1");
        (machine, group, signal, context)
    }

    // ── Validation at begin ──────────────────────────────────────────

    #[test]
    fn test_begin_without_identity() {
        let (_, group, signal, context) = member_setup();
        let mut machine = ProofRequestMachine::new();
        assert!(matches!(
            machine.begin(&group, &signal, &context),
            Err(RequestError::NoIdentity)
        ));
        assert_eq!(machine.phase(), RequestPhase::Idle);

        // The rejected intent is visible in the log.
        let phases: Vec<RequestPhase> = machine.transitions().iter().map(|t| t.to).collect();
        assert_eq!(phases, vec![RequestPhase::Preparing, RequestPhase::Idle]);
    }

    #[test]
    fn test_begin_with_empty_group() {
        let (mut machine, _, signal, context) = member_setup();
        let empty = Group::build(vec![], 20).unwrap();
        assert!(matches!(
            machine.begin(&empty, &signal, &context),
            Err(RequestError::EmptyGroup)
        ));
        assert_eq!(machine.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_begin_with_empty_signal() {
        let (mut machine, group, _, context) = member_setup();
        let empty = Signal::encode("").unwrap();
        assert!(matches!(
            machine.begin(&group, &empty, &context),
            Err(RequestError::EmptySignal)
        ));
        assert_eq!(machine.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_begin_while_in_flight() {
        let (mut machine, group, signal, context) = member_setup();
        let id = machine.begin(&group, &signal, &context).unwrap();
        let err = machine.begin(&group, &signal, &context).unwrap_err();
        assert!(matches!(
            err,
            RequestError::RequestInFlight { id: in_flight } if in_flight == id
        ));
        assert_eq!(machine.phase(), RequestPhase::AwaitingProof);

        // The rejection does not disturb the first request: it still
        // resolves normally.
        let bundle = machine
            .current_request()
            .unwrap()
            .clone()
            .dispatch(&TransparentProver::new())
            .unwrap();
        assert!(machine.complete(id, bundle).is_some());
        assert_eq!(machine.phase(), RequestPhase::Succeeded);
    }

    #[test]
    fn test_begin_captures_group_snapshot() {
        let (mut machine, group, signal, context) = member_setup();
        machine.begin(&group, &signal, &context).unwrap();
        let request = machine.current_request().unwrap();
        assert_eq!(request.group().root(), group.root());
        assert_eq!(request.signal(), &signal);
        assert_eq!(request.context(), &context);
    }

    // ── Full flow ────────────────────────────────────────────────────

    #[test]
    fn test_submit_produces_verifiable_bundle() {
        let (mut machine, group, signal, context) = member_setup();
        let backend = TransparentProver::new();
        let bundle = machine.submit(&backend, &group, &signal, &context).unwrap();
        assert_eq!(bundle.root, *group.root());
        assert!(bundle.verify_with(&backend).unwrap());
        assert_eq!(machine.phase(), RequestPhase::Succeeded);
    }

    #[test]
    fn test_submit_again_after_success() {
        let (mut machine, group, signal, context) = member_setup();
        let backend = TransparentProver::new();
        machine.submit(&backend, &group, &signal, &context).unwrap();
        let other = Signal::encode("no").unwrap();
        let bundle = machine.submit(&backend, &group, &other, &context).unwrap();
        assert_eq!(bundle.signal, other);
        assert_eq!(machine.phase(), RequestPhase::Succeeded);
    }

    #[test]
    fn test_submit_nullifier_deterministic_per_context() {
        let (mut machine, group, signal, context) = member_setup();
        let backend = TransparentProver::new();
        let first = machine
            .submit(&backend, &group, &signal, &context)
            .unwrap()
            .nullifier_hash;
        let second = machine
            .submit(&backend, &group, &signal, &context)
            .unwrap()
            .nullifier_hash;
        assert_eq!(first, second);

        let other_ctx = ContextId::new("poll-2");
        let third = machine
            .submit(&backend, &group, &signal, &other_ctx)
            .unwrap()
            .nullifier_hash;
        assert_ne!(first, third);
    }

    #[test]
    fn test_submit_non_member_fails_and_recovers() {
        let (mut machine, _, signal, context) = member_setup();
        let stranger = IdentitySecret::generate();
        let other_group = Group::build(vec![stranger.commitment()], 20).unwrap();
        let backend = TransparentProver::new();
        let err = machine
            .submit(&backend, &other_group, &signal, &context)
            .unwrap_err();
        assert!(matches!(err, RequestError::ProofGenerationFailed { .. }));
        assert_eq!(machine.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_backend_failure_returns_machine_to_idle() {
        let (mut machine, group, signal, context) = member_setup();
        let err = machine
            .submit(&BrokenProver, &group, &signal, &context)
            .unwrap_err();
        assert!(matches!(err, RequestError::ProofGenerationFailed { .. }));
        assert_eq!(machine.phase(), RequestPhase::Idle);
        assert!(machine.last_bundle().is_none());

        // The machine accepts a new request afterwards.
        let backend = TransparentProver::new();
        assert!(machine.submit(&backend, &group, &signal, &context).is_ok());
    }

    #[test]
    fn test_root_mismatch_from_prover_is_rejected() {
        let (mut machine, group, signal, context) = member_setup();
        let err = machine
            .submit(&RootLyingProver, &group, &signal, &context)
            .unwrap_err();
        assert!(matches!(err, RequestError::ProofGenerationFailed { .. }));
        assert!(machine.last_bundle().is_none());
    }

    #[test]
    fn test_failure_preserves_prior_bundle() {
        let (mut machine, group, signal, context) = member_setup();
        let backend = TransparentProver::new();
        machine.submit(&backend, &group, &signal, &context).unwrap();
        let kept = machine.last_bundle().unwrap().clone();

        let _ = machine.submit(&BrokenProver, &group, &signal, &context);
        assert_eq!(machine.phase(), RequestPhase::Idle);
        assert_eq!(machine.last_bundle(), Some(&kept));
    }

    #[test]
    fn test_failure_logged_through_failed_phase() {
        let (mut machine, group, signal, context) = member_setup();
        let _ = machine.submit(&BrokenProver, &group, &signal, &context);
        let phases: Vec<RequestPhase> = machine.transitions().iter().map(|t| t.to).collect();
        assert_eq!(
            phases,
            vec![
                RequestPhase::Preparing,
                RequestPhase::AwaitingProof,
                RequestPhase::Failed,
                RequestPhase::Idle
            ]
        );
    }

    // ── Cancellation and stale delivery ──────────────────────────────

    #[test]
    fn test_cancel_retires_request() {
        let (mut machine, group, signal, context) = member_setup();
        let id = machine.begin(&group, &signal, &context).unwrap();
        assert_eq!(machine.cancel(), Some(id));
        assert_eq!(machine.phase(), RequestPhase::Idle);

        // A late prover result for the retired id is discarded.
        let identity = IdentitySecret::generate();
        let late_group = Group::build(vec![identity.commitment()], 20).unwrap();
        let stale = ProofRequest::new(identity, late_group, signal.clone(), context.clone())
            .dispatch(&TransparentProver::new())
            .unwrap();
        assert!(machine.complete(id, stale).is_none());
        assert_eq!(machine.phase(), RequestPhase::Idle);
        assert!(machine.last_bundle().is_none());
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let (mut machine, _, _, _) = member_setup();
        assert!(machine.cancel().is_none());
        assert!(machine.transitions().is_empty());
    }

    #[test]
    fn test_stale_fail_is_noop() {
        let (mut machine, group, signal, context) = member_setup();
        let id = machine.begin(&group, &signal, &context).unwrap();
        machine.cancel();
        let before = machine.transitions().len();
        machine.fail(id, "late backend failure");
        assert_eq!(machine.transitions().len(), before);
        assert_eq!(machine.phase(), RequestPhase::Idle);
    }

    // ── Timeout ──────────────────────────────────────────────────────

    #[test]
    fn test_expire_if_overdue() {
        let (machine, group, signal, context) = member_setup();
        let mut machine = machine.with_timeout_secs(30);
        machine.begin(&group, &signal, &context).unwrap();

        let now = Timestamp::now();
        assert!(machine.expire_if_overdue(now).is_none());
        assert_eq!(machine.phase(), RequestPhase::AwaitingProof);

        let later = Timestamp::parse("2099-01-01T00:00:00Z").unwrap();
        let err = machine.expire_if_overdue(later).unwrap();
        assert!(matches!(err, RequestError::Timeout { .. }));
        assert_eq!(machine.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_expire_without_timeout_configured() {
        let (mut machine, group, signal, context) = member_setup();
        machine.begin(&group, &signal, &context).unwrap();
        let far = Timestamp::parse("2099-01-01T00:00:00Z").unwrap();
        assert!(machine.expire_if_overdue(far).is_none());
        assert_eq!(machine.phase(), RequestPhase::AwaitingProof);
    }

    // ── Transition log shape ─────────────────────────────────────────

    #[test]
    fn test_transition_log_records_full_flow() {
        let (mut machine, group, signal, context) = member_setup();
        let backend = TransparentProver::new();
        machine.submit(&backend, &group, &signal, &context).unwrap();
        machine.begin(&group, &signal, &context).unwrap();
        machine.cancel();

        let pairs: Vec<(RequestPhase, RequestPhase)> = machine
            .transitions()
            .iter()
            .map(|t| (t.from, t.to))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (RequestPhase::Idle, RequestPhase::Preparing),
                (RequestPhase::Preparing, RequestPhase::AwaitingProof),
                (RequestPhase::AwaitingProof, RequestPhase::Succeeded),
                (RequestPhase::Succeeded, RequestPhase::Preparing),
                (RequestPhase::Preparing, RequestPhase::AwaitingProof),
                (RequestPhase::AwaitingProof, RequestPhase::Idle),
            ]
        );
    }
}
