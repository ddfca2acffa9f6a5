//! Contribution line model
//!
//! Represents one participant's slice of a split charge:
//! - Participant reference (id, unique within a session)
//! - Amount (i64 cents, always within `[0, total]`)
//! - Paying flag (whether the line currently counts toward the collected total)
//!
//! Lines are owned by a `SplitSession`; external callers read them through
//! getters and mutate them only through the session API.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// One participant's share of a split charge
///
/// A line is never removed from its session: opting a participant out flips
/// `is_paying` and leaves the amount in place, so re-enabling the line
/// restores the previous figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    /// Participant this line belongs to
    participant_id: String,

    /// Contribution amount (i64 cents)
    amount: i64,

    /// Whether this line counts toward the collected total
    is_paying: bool,
}

impl ContributionLine {
    /// Create a new contribution line
    pub(crate) fn new(participant_id: String, amount: i64, is_paying: bool) -> Self {
        Self {
            participant_id,
            amount,
            is_paying,
        }
    }

    /// Get the participant ID this line belongs to
    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    /// Get the contribution amount (i64 cents)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Check whether this line counts toward the collected total
    pub fn is_paying(&self) -> bool {
        self.is_paying
    }

    /// Amount this line contributes to the collected total (i64 cents)
    ///
    /// Returns the line amount while paying, 0 while opted out.
    pub fn committed_amount(&self) -> i64 {
        if self.is_paying {
            self.amount
        } else {
            0
        }
    }

    /// Overwrite the amount (session-internal; caller clamps first)
    pub(crate) fn set_amount(&mut self, amount: i64) {
        self.amount = amount;
    }

    /// Flip the paying flag (session-internal)
    pub(crate) fn toggle_paying(&mut self) {
        self.is_paying = !self.is_paying;
    }
}
