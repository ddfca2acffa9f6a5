//! Split session aggregate
//!
//! Owns the authoritative state of one split interaction: the fixed total,
//! the active allocation strategy, and one contribution line per roster
//! participant. Every user interaction maps to exactly one mutation method
//! here; derived values (outstanding balance, per-participant contribution)
//! are recomputed from the lines on demand via `reconcile`, never cached.
//!
//! # Lifecycle
//!
//! ```text
//! SplitSession::new ──> Active ──confirm──> Confirmed (terminal)
//!                          │
//!                          └───cancel────> Cancelled (terminal)
//! ```
//!
//! A session is created when the user opts into splitting a charge and
//! discarded after confirmation or cancellation; it is never persisted.
//! Mutations on a terminal session fail with `SessionError::Closed`.
//!
//! # Critical Invariants
//!
//! 1. Exactly one line per roster participant, in roster order; toggling
//!    never removes a line
//! 2. Every line amount stays within `[0, total_amount]`
//! 3. The payer's line always has `is_paying == true`
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ContributionLine, Participant};
use crate::reconcile;
use crate::strategy::{equal_share, AllocationStrategy};

/// Default step for the amount increment/decrement controls (i64 cents)
pub const DEFAULT_AMOUNT_STEP: i64 = 1_000;

/// Session lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Accepting mutations
    Active,

    /// Finalized; the line set has been handed to the payment collaborator
    Confirmed,

    /// Abandoned by the user
    Cancelled,
}

/// Errors that can occur when constructing a session
#[derive(Debug, Error, PartialEq)]
pub enum SessionInitError {
    #[error("Total amount must be positive: {amount}")]
    NonPositiveTotal { amount: i64 },

    #[error("Participant roster is empty")]
    EmptyRoster,

    #[error("Duplicate participant in roster: {id}")]
    DuplicateParticipant { id: String },

    #[error("Payer {payer_id} is not in the roster")]
    PayerNotInRoster { payer_id: String },
}

/// Errors that can occur on an already-constructed session
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Session is {status:?}; mutation requires an active session")]
    Closed { status: SessionStatus },

    #[error("Outstanding balance is {outstanding} cents; confirmation requires exactly zero")]
    Unreconciled { outstanding: i64 },
}

/// Finalized split handed to the payment-initiation collaborator
///
/// Produced by [`SplitSession::confirm`]. The collaborator charges only
/// `payer_amount` from the acting user; the remaining lines are
/// coordination data for the group, not separately charged here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitOutcome {
    /// Session this outcome was finalized from
    pub session_id: String,

    /// Total charge that was split (i64 cents)
    pub total_amount: i64,

    /// Acting user who drove the split
    pub payer_id: String,

    /// Amount the payment collaborator collects from the payer (i64 cents)
    pub payer_amount: i64,

    /// Finalized contribution lines, one per roster participant
    pub lines: Vec<ContributionLine>,
}

/// Mutable aggregate for one split interaction
///
/// # Example
/// ```
/// use split_payment_core_rs::{AllocationStrategy, Participant, SplitSession};
///
/// let roster = vec![
///     Participant::new("a".into(), "alice".into(), "Alice".into()),
///     Participant::new("b".into(), "bob".into(), "Bob".into()),
/// ];
///
/// let mut session = SplitSession::new(20_000, &roster, "a").unwrap();
/// assert_eq!(session.outstanding(), 10_000); // only the payer starts paying
///
/// session.toggle_paying("b").unwrap();
/// assert_eq!(session.outstanding(), 0);
/// assert!(session.can_confirm());
///
/// let outcome = session.confirm().unwrap();
/// assert_eq!(outcome.payer_amount, 10_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSession {
    /// Unique session identifier (UUID)
    id: String,

    /// Charge being split (i64 cents, fixed for the session's lifetime)
    total_amount: i64,

    /// Active allocation strategy
    strategy: AllocationStrategy,

    /// One line per roster participant, in roster order
    lines: Vec<ContributionLine>,

    /// Acting/local user driving the split
    payer_id: String,

    /// Step for the amount increment/decrement controls (i64 cents)
    step: i64,

    /// Lifecycle status
    status: SessionStatus,
}

impl SplitSession {
    /// Create a new split session
    ///
    /// Builds one contribution line per roster participant, each carrying
    /// the rounded equal share of the total. Only the payer's line starts
    /// with `is_paying == true`: every other participant must be opted in
    /// explicitly, so with more than one participant the session starts
    /// with a positive outstanding balance.
    ///
    /// # Arguments
    /// * `total_amount` - Charge to split (i64 cents, must be positive)
    /// * `participants` - Roster sharing the charge (must be non-empty,
    ///   ids unique, and include the payer)
    /// * `payer_id` - The acting/local user's id
    ///
    /// # Errors
    /// * `NonPositiveTotal` if `total_amount <= 0`
    /// * `EmptyRoster` if `participants` is empty
    /// * `DuplicateParticipant` if a participant id repeats
    /// * `PayerNotInRoster` if `payer_id` matches no participant
    pub fn new(
        total_amount: i64,
        participants: &[Participant],
        payer_id: &str,
    ) -> Result<Self, SessionInitError> {
        if total_amount <= 0 {
            return Err(SessionInitError::NonPositiveTotal {
                amount: total_amount,
            });
        }
        if participants.is_empty() {
            return Err(SessionInitError::EmptyRoster);
        }
        if !participants.iter().any(|p| p.id() == payer_id) {
            return Err(SessionInitError::PayerNotInRoster {
                payer_id: payer_id.to_string(),
            });
        }

        let share = equal_share(total_amount, participants.len());
        let mut lines: Vec<ContributionLine> = Vec::with_capacity(participants.len());
        for participant in participants {
            if lines
                .iter()
                .any(|line| line.participant_id() == participant.id())
            {
                return Err(SessionInitError::DuplicateParticipant {
                    id: participant.id().to_string(),
                });
            }
            lines.push(ContributionLine::new(
                participant.id().to_string(),
                share,
                participant.id() == payer_id,
            ));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            total_amount,
            strategy: AllocationStrategy::Equal,
            lines,
            payer_id: payer_id.to_string(),
            step: DEFAULT_AMOUNT_STEP,
            status: SessionStatus::Active,
        })
    }

    /// Set the amount-control step (builder pattern)
    ///
    /// # Panics
    /// Panics if `step <= 0`
    pub fn with_step(mut self, step: i64) -> Self {
        assert!(step > 0, "step must be positive");
        self.step = step;
        self
    }

    /// Get session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the total charge being split (i64 cents)
    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    /// Get the active allocation strategy
    pub fn strategy(&self) -> AllocationStrategy {
        self.strategy
    }

    /// Get the payer's participant id
    pub fn payer_id(&self) -> &str {
        &self.payer_id
    }

    /// Get the amount-control step (i64 cents)
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Get current lifecycle status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check whether the session still accepts mutations
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Immutable view of the contribution lines, in roster order
    pub fn snapshot(&self) -> &[ContributionLine] {
        &self.lines
    }

    /// Switch the allocation strategy
    ///
    /// Switching to `Equal` recomputes every line's amount from the
    /// equal-share formula (paying flags untouched); switching to `Custom`
    /// leaves the current amounts in place as the editing baseline.
    pub fn set_strategy(&mut self, strategy: AllocationStrategy) -> Result<(), SessionError> {
        self.ensure_active()?;
        strategy.reallocate(&mut self.lines, self.total_amount);
        self.strategy = strategy;
        Ok(())
    }

    /// Flip whether a participant's line counts toward the collected total
    ///
    /// The payer's own line cannot be toggled: the acting user is always a
    /// committed contributor, so the call is a no-op rather than an error.
    /// An id with no line in the session is likewise a no-op.
    pub fn toggle_paying(&mut self, participant_id: &str) -> Result<(), SessionError> {
        self.ensure_active()?;
        if participant_id == self.payer_id {
            return Ok(());
        }
        if let Some(line) = self.line_mut(participant_id) {
            line.toggle_paying();
        }
        Ok(())
    }

    /// Set a line's amount, clamped into `[0, total_amount]`
    ///
    /// The editing surface for the `Custom` strategy. Out-of-range input is
    /// clamped, not rejected. No-op when the line is opted out (its amount
    /// is frozen until it is toggled back in) or when the id is unknown.
    pub fn set_line_amount(&mut self, participant_id: &str, amount: i64) -> Result<(), SessionError> {
        self.ensure_active()?;
        let total = self.total_amount;
        if let Some(line) = self.line_mut(participant_id) {
            if line.is_paying() {
                line.set_amount(amount.clamp(0, total));
            }
        }
        Ok(())
    }

    /// Adjust a line's amount by a signed step delta
    ///
    /// Wrapper for the +/- step controls. A decrement is refused outright
    /// while the current amount is at or below the configured step, so the
    /// control bottoms out at the step size instead of walking to zero.
    /// Otherwise the result is clamped into `[0, total_amount]`. No-op for
    /// opted-out lines and unknown ids.
    pub fn increment_line_amount(
        &mut self,
        participant_id: &str,
        delta: i64,
    ) -> Result<(), SessionError> {
        self.ensure_active()?;
        let total = self.total_amount;
        let step = self.step;
        if let Some(line) = self.line_mut(participant_id) {
            if !line.is_paying() {
                return Ok(());
            }
            if delta < 0 && line.amount() <= step {
                return Ok(());
            }
            let amount = line.amount().saturating_add(delta);
            line.set_amount(amount.clamp(0, total));
        }
        Ok(())
    }

    /// Portion of the total not yet covered by committed lines (i64 cents)
    ///
    /// Derived fresh from the lines on every call.
    pub fn outstanding(&self) -> i64 {
        reconcile::outstanding(self.total_amount, &self.lines)
    }

    /// Amount a participant currently contributes (i64 cents)
    ///
    /// 0 for opted-out lines and unknown ids.
    pub fn contribution_of(&self, participant_id: &str) -> i64 {
        reconcile::contribution_of(&self.lines, participant_id)
    }

    /// Amount the payer currently contributes (i64 cents)
    pub fn payer_contribution(&self) -> i64 {
        reconcile::contribution_of(&self.lines, &self.payer_id)
    }

    /// Check whether the session can be confirmed
    ///
    /// True iff the session is still active and the outstanding balance is
    /// exactly zero. A one-cent equal-share rounding artifact blocks
    /// confirmation until reconciled manually, as does an overshoot.
    pub fn can_confirm(&self) -> bool {
        self.is_active() && reconcile::can_confirm(self.total_amount, &self.lines)
    }

    /// Finalize the session and produce the outcome for the payment
    /// collaborator
    ///
    /// Transitions to `Confirmed`; all further mutation fails with
    /// `SessionError::Closed`.
    ///
    /// # Errors
    /// * `Unreconciled` if the outstanding balance is not exactly zero
    /// * `Closed` if the session is already terminal
    pub fn confirm(&mut self) -> Result<SplitOutcome, SessionError> {
        self.ensure_active()?;
        let outstanding = self.outstanding();
        if outstanding != 0 {
            return Err(SessionError::Unreconciled { outstanding });
        }

        self.status = SessionStatus::Confirmed;
        Ok(SplitOutcome {
            session_id: self.id.clone(),
            total_amount: self.total_amount,
            payer_id: self.payer_id.clone(),
            payer_amount: self.payer_contribution(),
            lines: self.lines.clone(),
        })
    }

    /// Abandon the session
    ///
    /// Transitions to `Cancelled`; the caller discards the instance.
    ///
    /// # Errors
    /// * `Closed` if the session is already terminal
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.status = SessionStatus::Cancelled;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(SessionError::Closed {
                status: self.status,
            })
        }
    }

    fn line_mut(&mut self, participant_id: &str) -> Option<&mut ContributionLine> {
        self.lines
            .iter_mut()
            .find(|line| line.participant_id() == participant_id)
    }
}
