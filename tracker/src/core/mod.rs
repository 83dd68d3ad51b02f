//! Core business logic modules
//!
//! Pure logic with no I/O dependencies

pub mod goal;
pub mod messages;
pub mod normalizer;
pub mod state;

// Re-export commonly used types
pub use goal::{GoalEvaluator, GoalOutcome};
pub use normalizer::normalize;
pub use state::State;
