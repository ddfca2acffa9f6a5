//! Reconciliation calculator
//!
//! Pure derivation functions over `(total_amount, lines)`. Nothing here
//! holds state: the session recomputes these from scratch after every
//! mutation instead of patching a cached figure, so the derived values can
//! never drift from the lines that produce them.
//!
//! # Critical Invariants
//!
//! 1. `outstanding = total - committed_total`, exact in cents
//! 2. Only paying lines count toward the committed total
//! 3. Confirmation requires the outstanding balance to be exactly zero
//!
//! CRITICAL: All money values are i64 (cents)

use crate::models::ContributionLine;

/// Sum of all currently-committed contributions (i64 cents)
///
/// Lines with `is_paying == false` contribute nothing, whatever amount
/// they carry.
pub fn committed_total(lines: &[ContributionLine]) -> i64 {
    lines.iter().map(ContributionLine::committed_amount).sum()
}

/// Portion of the total charge not yet covered by committed lines
/// (i64 cents)
///
/// Positive while contributions fall short, negative when they overshoot,
/// zero when the split is reconciled.
///
/// # Example
/// ```
/// use split_payment_core_rs::{Participant, SplitSession};
///
/// let roster = vec![
///     Participant::new("a".into(), "alice".into(), "Alice".into()),
///     Participant::new("b".into(), "bob".into(), "Bob".into()),
/// ];
/// let session = SplitSession::new(10_000, &roster, "a").unwrap();
///
/// // Only the payer starts committed, at the equal share of 5_000
/// assert_eq!(session.outstanding(), 5_000);
/// ```
pub fn outstanding(total_amount: i64, lines: &[ContributionLine]) -> i64 {
    total_amount - committed_total(lines)
}

/// Amount a given participant currently contributes (i64 cents)
///
/// Returns the line amount while the line is paying, 0 while opted out,
/// and 0 for an id with no line in the session.
pub fn contribution_of(lines: &[ContributionLine], participant_id: &str) -> i64 {
    lines
        .iter()
        .find(|line| line.participant_id() == participant_id)
        .map_or(0, ContributionLine::committed_amount)
}

/// Confirmation gate: true iff the split is exactly reconciled
///
/// Exact equality, not an epsilon band: a one-cent shortfall from
/// independent equal-share rounding blocks confirmation, and so does an
/// overshoot.
pub fn can_confirm(total_amount: i64, lines: &[ContributionLine]) -> bool {
    outstanding(total_amount, lines) == 0
}
