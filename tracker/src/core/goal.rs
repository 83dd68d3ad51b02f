//! Goal completion and winner selection

use serde::Serialize;
use shared::{GOAL, TeamId};

use super::state::State;

/// Result of reaching the attendance goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalOutcome {
    /// One team holds the highest count
    SingleWinner { team: TeamId, count: u64 },
    /// Several teams share the highest count, listed in `TeamId::ALL` order
    Tie { teams: Vec<TeamId>, count: u64 },
}

impl GoalOutcome {
    /// Teams holding the top count
    pub fn leaders(&self) -> Vec<TeamId> {
        match self {
            GoalOutcome::SingleWinner { team, .. } => vec![*team],
            GoalOutcome::Tie { teams, .. } => teams.clone(),
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, GoalOutcome::Tie { .. })
    }
}

/// Decides whether a state has just reached the goal and who leads
#[derive(Debug, Clone, Copy)]
pub struct GoalEvaluator {
    goal: u64,
}

impl Default for GoalEvaluator {
    fn default() -> Self {
        Self::new(GOAL)
    }
}

impl GoalEvaluator {
    pub fn new(goal: u64) -> Self {
        Self { goal }
    }

    pub fn goal(&self) -> u64 {
        self.goal
    }

    /// Returns an outcome only when the total equals the goal exactly.
    ///
    /// Totals only grow, so a given state history reaches this at most once.
    pub fn evaluate(&self, state: &State) -> Option<GoalOutcome> {
        if state.total() != self.goal {
            return None;
        }

        // Stable sort keeps TeamId::ALL order among equal counts
        let mut ranked: Vec<(TeamId, u64)> = state.teams().iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let (leader, top) = ranked[0];
        let tied: Vec<TeamId> = ranked
            .iter()
            .take_while(|(_, count)| *count == top)
            .map(|(team, _)| *team)
            .collect();

        if tied.len() > 1 {
            Some(GoalOutcome::Tie { teams: tied, count: top })
        } else {
            Some(GoalOutcome::SingleWinner { team: leader, count: top })
        }
    }
}
