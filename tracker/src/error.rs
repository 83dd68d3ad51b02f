//! Tracker-specific error types

use thiserror::Error;

/// Validation failures surfaced to the caller of a check-in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckInError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Attendee already checked in: {name}")]
    DuplicateAttendee { name: String },

    #[error("Unknown team: {team}")]
    UnknownTeam { team: String },
}

/// Durable medium and persisted-state failures
///
/// These never reach the user; the store and engine log them and carry on
/// with the in-memory state.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Persistence failed for key '{key}': {source}")]
    PersistenceFailure {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage medium unavailable: {message}")]
    Unavailable { message: String },

    #[error("Invalid storage key: {key}")]
    InvalidKey { key: String },

    #[error("Persisted state could not be parsed: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Persisted state is corrupt: {reason}")]
    CorruptPersistedState { reason: String },

    #[error("State serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type CheckInResult<T> = Result<T, CheckInError>;
pub type StoreResult<T> = Result<T, StoreError>;
