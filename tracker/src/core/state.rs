//! Canonical check-in state and its persisted schema
//!
//! The persisted layout is `{ total, teams: { water, zero, power }, attendees: [{ name, team }] }`.
//! Loading goes through a typed schema and then [`State::validate`]; a payload
//! is either adopted whole or rejected whole.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::{Attendee, TeamCounts, TeamId};

use crate::error::{StoreError, StoreResult};

/// In-memory check-in state
///
/// Only serializable; reading a payload always goes through
/// [`State::from_persisted`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    total: u64,
    teams: TeamCounts,
    attendees: Vec<Attendee>,
}

/// Wire schema for a stored payload, trusted only after validation
#[derive(Deserialize)]
struct PersistedState {
    total: u64,
    teams: TeamCounts,
    attendees: Vec<Attendee>,
}

impl From<PersistedState> for State {
    fn from(persisted: PersistedState) -> Self {
        Self {
            total: persisted.total,
            teams: persisted.teams,
            attendees: persisted.attendees,
        }
    }
}

impl State {
    /// Empty state: zero total, zero team counts, no attendees
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn teams(&self) -> &TeamCounts {
        &self.teams
    }

    pub fn team_count(&self, team: TeamId) -> u64 {
        self.teams.get(team)
    }

    /// Attendees in check-in order
    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }

    /// Existing attendee with exactly this (already normalized) name
    pub fn find_attendee(&self, name: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.name == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_attendee(name).is_some()
    }

    /// Progress toward `goal`, capped at 100. A zero goal counts as met.
    pub fn progress_percent(&self, goal: u64) -> f64 {
        if goal == 0 {
            return 100.0;
        }
        (self.total as f64 * 100.0 / goal as f64).min(100.0)
    }

    /// Append an attendee and bump the counters.
    ///
    /// Only the check-in engine calls this, after validation and duplicate
    /// rejection.
    pub(crate) fn record(&mut self, attendee: Attendee) {
        self.total += 1;
        self.teams.increment(attendee.team);
        self.attendees.push(attendee);
    }

    /// Parse and validate a persisted payload
    pub fn from_persisted(raw: &str) -> StoreResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|source| StoreError::Deserialize { source })?;

        let state: State = serde_json::from_value::<PersistedState>(value)
            .map_err(|e| StoreError::CorruptPersistedState { reason: e.to_string() })?
            .into();

        state.validate()?;
        Ok(state)
    }

    /// Serialize the whole state in the persisted layout
    pub fn to_persisted(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check the counting and uniqueness invariants
    pub fn validate(&self) -> StoreResult<()> {
        let corrupt = |reason: String| Err(StoreError::CorruptPersistedState { reason });

        if self.total != self.attendees.len() as u64 {
            return corrupt(format!(
                "total {} does not match {} attendees",
                self.total,
                self.attendees.len()
            ));
        }

        if self.total != self.teams.sum() {
            return corrupt(format!(
                "total {} does not match team sum {}",
                self.total,
                self.teams.sum()
            ));
        }

        let mut recounted = TeamCounts::default();
        for attendee in &self.attendees {
            recounted.increment(attendee.team);
        }
        if recounted != self.teams {
            return corrupt("team counts do not match attendee teams".to_string());
        }

        let mut seen = HashSet::with_capacity(self.attendees.len());
        for attendee in &self.attendees {
            if !seen.insert(attendee.name.as_str()) {
                return corrupt(format!("duplicate attendee '{}'", attendee.name));
            }
        }

        Ok(())
    }
}
