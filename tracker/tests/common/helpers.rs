//! Test helpers and builder patterns for tracker tests

use std::sync::Arc;

use shared::{TeamCounts, TeamId};
use tracker::services::InMemoryStore;
use tracker::{CheckInEngine, GoalEvaluator, GoalOutcome, MockKeyValueStore, State, StateStore};

use super::fixtures::TestFixtures;

/// Builder for test engines over an in-memory medium
pub struct EngineBuilder {
    medium: Arc<InMemoryStore>,
    goal: Option<u64>,
    load: bool,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            medium: Arc::new(InMemoryStore::new()),
            goal: None,
            load: false,
        }
    }

    /// Share an existing medium, e.g. to simulate a page reload
    pub fn with_medium(mut self, medium: Arc<InMemoryStore>) -> Self {
        self.medium = medium;
        self
    }

    pub fn with_goal(mut self, goal: u64) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Load persisted state before returning the engine
    pub fn loaded(mut self) -> Self {
        self.load = true;
        self
    }

    pub fn build(self) -> CheckInEngine<Arc<InMemoryStore>> {
        let store = StateStore::new(self.medium, TestFixtures::TEST_KEY);
        let mut engine = match self.goal {
            Some(goal) => CheckInEngine::with_evaluator(store, GoalEvaluator::new(goal)),
            None => CheckInEngine::new(store),
        };
        if self.load {
            engine.load();
        }
        engine
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Medium mock that rejects every call
    pub fn untouchable_medium() -> MockKeyValueStore {
        let mut medium = MockKeyValueStore::new();
        medium.expect_get_item().never();
        medium.expect_set_item().never();
        medium
    }

    /// Check in `water`, `zero` and `power` attendees in that order, returning
    /// the goal outcome reported by the final check-in
    pub fn fill_teams<K: tracker::KeyValueStore>(
        engine: &mut CheckInEngine<K>,
        water: usize,
        zero: usize,
        power: usize,
    ) -> Option<GoalOutcome> {
        let names = TestFixtures::guest_names(water + zero + power);
        let teams = std::iter::repeat(TeamId::Water)
            .take(water)
            .chain(std::iter::repeat(TeamId::Zero).take(zero))
            .chain(std::iter::repeat(TeamId::Power).take(power));

        let mut last = None;
        for (name, team) in names.iter().zip(teams) {
            let receipt = engine.check_in(name, team.key()).unwrap();
            Self::assert_invariants(engine.state());
            last = receipt.goal;
        }
        last
    }

    /// The counting invariants that must hold after every operation
    pub fn assert_invariants(state: &State) {
        assert_eq!(state.total(), state.attendees().len() as u64);
        assert_eq!(state.total(), state.teams().sum());

        let mut recounted = TeamCounts::default();
        for attendee in state.attendees() {
            recounted.increment(attendee.team);
        }
        assert_eq!(&recounted, state.teams());
    }
}
