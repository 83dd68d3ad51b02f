//! Check-in entry point
//!
//! [`CheckInEngine::check_in`] is the only path that mutates the attendee list
//! or the counters, which keeps the state invariants true by induction.

use serde::Serialize;
use shared::{Attendee, TeamId, process_info, process_warn};

use crate::core::{GoalEvaluator, GoalOutcome, State, normalize};
use crate::error::{CheckInError, CheckInResult};
use crate::store::{LoadOutcome, StateStore};
use crate::traits::KeyValueStore;

/// Successful check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInReceipt {
    /// Canonical attendee as stored
    pub attendee: Attendee,
    /// Whether the durable write succeeded
    pub persisted: bool,
    /// Present only for the check-in that brings the total to the goal
    pub goal: Option<GoalOutcome>,
}

/// Applies check-in requests against a [`StateStore`]
pub struct CheckInEngine<K: KeyValueStore> {
    store: StateStore<K>,
    evaluator: GoalEvaluator,
}

impl<K: KeyValueStore> CheckInEngine<K> {
    pub fn new(store: StateStore<K>) -> Self {
        Self::with_evaluator(store, GoalEvaluator::default())
    }

    pub fn with_evaluator(store: StateStore<K>, evaluator: GoalEvaluator) -> Self {
        Self { store, evaluator }
    }

    /// Load persisted state into the owned store
    pub fn load(&mut self) -> LoadOutcome {
        self.store.load()
    }

    pub fn state(&self) -> &State {
        self.store.state()
    }

    pub fn store(&self) -> &StateStore<K> {
        &self.store
    }

    pub fn goal(&self) -> u64 {
        self.evaluator.goal()
    }

    /// Validate, deduplicate and record one attendee.
    ///
    /// Rejections leave the state untouched and never touch the medium. A
    /// failed durable write does not undo the check-in; it is logged and
    /// reported through [`CheckInReceipt::persisted`].
    pub fn check_in(&mut self, raw_name: &str, raw_team: &str) -> CheckInResult<CheckInReceipt> {
        if raw_name.is_empty() || raw_team.trim().is_empty() {
            return Err(CheckInError::MissingField {
                field: if raw_name.is_empty() { "name" } else { "team" },
            });
        }

        let name = normalize(raw_name);
        if name.is_empty() {
            return Err(CheckInError::MissingField { field: "name" });
        }

        let team: TeamId = raw_team.parse().map_err(|_| CheckInError::UnknownTeam {
            team: raw_team.to_string(),
        })?;

        if let Some(existing) = self.store.state().find_attendee(&name) {
            return Err(CheckInError::DuplicateAttendee {
                name: existing.name.clone(),
            });
        }

        let attendee = Attendee::new(name, team);
        self.store.state_mut().record(attendee.clone());

        let persisted = match self.store.save() {
            Ok(()) => true,
            Err(e) => {
                process_warn!(shared::ProcessId::current(), "Could not save state: {}", e);
                false
            }
        };

        process_info!(
            shared::ProcessId::current(),
            "✅ Checked in {} to {} ({} total)",
            attendee.name,
            team.label(),
            self.store.state().total()
        );

        let goal = self.evaluator.evaluate(self.store.state());
        if let Some(outcome) = &goal {
            process_info!(shared::ProcessId::current(), "🎉 Goal reached: {:?}", outcome);
        }

        Ok(CheckInReceipt {
            attendee,
            persisted,
            goal,
        })
    }
}
