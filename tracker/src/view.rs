//! Read model consumed by renderers

use serde::Serialize;
use shared::TeamId;

use crate::core::State;
use crate::core::messages::EMPTY_LIST;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    pub team: TeamId,
    pub label: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendeeRow {
    pub name: String,
    pub team: TeamId,
    pub team_label: &'static str,
}

/// Snapshot of everything a dashboard draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub total: u64,
    pub goal: u64,
    pub progress_percent: f64,
    pub teams: Vec<TeamRow>,
    pub attendees: Vec<AttendeeRow>,
    /// Placeholder text when no one has checked in
    pub empty_message: Option<&'static str>,
}

impl DashboardView {
    pub fn from_state(state: &State, goal: u64) -> Self {
        let teams = state
            .teams()
            .iter()
            .map(|(team, count)| TeamRow {
                team,
                label: team.label(),
                count,
            })
            .collect();

        let attendees = state
            .attendees()
            .iter()
            .map(|a| AttendeeRow {
                name: a.name.clone(),
                team: a.team,
                team_label: a.team.label(),
            })
            .collect();

        Self {
            total: state.total(),
            goal,
            progress_percent: state.progress_percent(goal),
            teams,
            attendees,
            empty_message: state.is_empty().then_some(EMPTY_LIST),
        }
    }
}
