//! Allocation strategies
//!
//! The policy governing how contribution amounts are computed or edited:
//!
//! 1. **Equal**: every line gets `round(total / participant_count)` cents,
//!    computed independently per line.
//! 2. **Custom**: amounts are free-form per line; the session clamps each
//!    edit into `[0, total]` and never redistributes.
//!
//! Strategies are a tagged variant with the recomputation behavior attached,
//! so a future policy (e.g. weighted split) is a new variant rather than an
//! extra branch at every mutation site.
//!
//! # Rounding Note
//!
//! `Equal` does **not** redistribute the rounding remainder. When the total
//! does not divide evenly, the per-line shares can sum to slightly more or
//! less than the total (10_000 cents across 3 lines gives 3_333 each, summing
//! to 9_999). The resulting non-zero outstanding balance is surfaced to the
//! user, who reconciles it manually under `Custom`.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

use crate::models::ContributionLine;

/// Policy for computing per-line contribution amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStrategy {
    /// Every line carries the rounded equal share of the total
    Equal,

    /// Per-line amounts are edited freely (clamped by the session)
    Custom,
}

impl AllocationStrategy {
    /// Recompute line amounts for this strategy
    ///
    /// - `Equal` overwrites every line's amount with the equal share,
    ///   regardless of its paying flag. Paying flags are never touched.
    /// - `Custom` leaves all amounts in place, so switching from `Equal`
    ///   lets the user fine-tune from the equal baseline.
    ///
    /// # Panics
    /// Panics if `lines` is empty (precluded by session construction).
    pub fn reallocate(&self, lines: &mut [ContributionLine], total_amount: i64) {
        match self {
            AllocationStrategy::Equal => {
                let share = equal_share(total_amount, lines.len());
                for line in lines.iter_mut() {
                    line.set_amount(share);
                }
            }
            AllocationStrategy::Custom => {}
        }
    }
}

/// Equal share of a total across `count` participants, rounded half-up
/// to the nearest cent
///
/// # Arguments
/// * `total_amount` - Charge being split (i64 cents, must be positive)
/// * `count` - Number of participants (must be > 0)
///
/// # Panics
/// Panics if `count == 0`. Session construction rejects an empty roster,
/// so this is unreachable through the public session API.
///
/// # Example
/// ```
/// use split_payment_core_rs::strategy::equal_share;
///
/// assert_eq!(equal_share(40_000, 4), 10_000);
/// assert_eq!(equal_share(10_000, 3), 3_333); // 3_333.33 rounds down
/// assert_eq!(equal_share(100, 8), 13);       // 12.5 rounds up
/// ```
pub fn equal_share(total_amount: i64, count: usize) -> i64 {
    assert!(count > 0, "cannot split across zero participants");
    let n = count as i64;
    // Round-half-up integer division: floor((2a + b) / 2b) for a, b > 0
    (2 * total_amount + n) / (2 * n)
}
