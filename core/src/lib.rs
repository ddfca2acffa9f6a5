//! Split Payment Core - Reconciliation Engine
//!
//! In-memory engine for splitting a single charge across a group of
//! participants. Tracks per-participant contribution lines under two
//! allocation strategies (equal and custom), continuously re-derives the
//! outstanding balance, and gates confirmation on that balance reaching
//! exactly zero.
//!
//! # Architecture
//!
//! - **models**: Domain types (Participant, ContributionLine)
//! - **strategy**: Allocation policies (Equal, Custom)
//! - **reconcile**: Pure derivation of outstanding balance and contributions
//! - **session**: Mutable split-session aggregate and lifecycle
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (cents)
//! 2. Derived values are recomputed from the lines, never cached
//! 3. Execution is fully synchronous; one caller drives one session
//!
//! The engine owns no I/O: rosters and totals come from the calling layer,
//! and the finalized [`SplitOutcome`] is handed back to it on confirmation.

// Module declarations
pub mod models;
pub mod reconcile;
pub mod session;
pub mod strategy;

// Re-exports for convenience
pub use models::{ContributionLine, Participant};
pub use session::{
    SessionError, SessionInitError, SessionStatus, SplitOutcome, SplitSession,
    DEFAULT_AMOUNT_STEP,
};
pub use strategy::AllocationStrategy;
