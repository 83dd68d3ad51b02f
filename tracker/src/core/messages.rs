//! User-facing notification text

use shared::TeamId;

use super::goal::GoalOutcome;
use crate::error::CheckInError;

/// Placeholder shown when nobody has checked in yet
pub const EMPTY_LIST: &str = "No attendees yet.";

pub fn welcome(name: &str, team: TeamId) -> String {
    format!("Welcome, {name}! Checked in to {}.", team.label())
}

/// Greeting text for a rejected check-in
pub fn rejection(error: &CheckInError) -> String {
    match error {
        CheckInError::MissingField { .. } => "Please enter a name and select a team.".to_string(),
        CheckInError::DuplicateAttendee { name } => format!("{name} is already checked in."),
        CheckInError::UnknownTeam { team } => format!("Unknown team: {team}."),
    }
}

/// Banner text for the goal-reaching check-in
pub fn celebration(outcome: &GoalOutcome) -> String {
    let winner_text = match outcome {
        GoalOutcome::Tie { teams, .. } => {
            let labels: Vec<&str> = teams.iter().map(TeamId::label).collect();
            format!("It's a tie between {}!", labels.join(" & "))
        }
        GoalOutcome::SingleWinner { team, count } => {
            format!("{} wins with {count} check-ins!", team.label())
        }
    };
    format!("🎉 Attendance goal reached! {winner_text}")
}
