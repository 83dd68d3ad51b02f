//! Shared types for the attendee check-in tracker
//!
//! Contains the team and attendee vocabulary used by both the CLI and the
//! webserver, plus process-aware logging helpers.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
