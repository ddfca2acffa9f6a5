//! Domain models for the split-payment engine

pub mod line;
pub mod participant;

// Re-exports
pub use line::ContributionLine;
pub use participant::Participant;
