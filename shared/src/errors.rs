//! Shared error types for the check-in tracker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown team: {input}")]
    UnknownTeam { input: String },
}
