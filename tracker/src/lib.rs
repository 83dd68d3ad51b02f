//! Attendee check-in tracker
//!
//! Records attendee names and team assignments, keeps them in a durable
//! key-value medium, and reports progress toward the attendance goal along
//! with the winning team once the goal is hit.

pub mod core;
pub mod engine;
pub mod error;
pub mod services;
pub mod store;
pub mod traits;
pub mod view;

// Re-export commonly used types
pub use crate::core::{GoalEvaluator, GoalOutcome, State, normalize};
pub use engine::{CheckInEngine, CheckInReceipt};
pub use error::{CheckInError, CheckInResult, StoreError, StoreResult};
pub use store::{LoadOutcome, StateStore};
pub use traits::{KeyValueStore, MockKeyValueStore};
pub use view::DashboardView;
