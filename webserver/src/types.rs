//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use shared::Attendee;
use tracker::{CheckInReceipt, GoalOutcome};
use tracker::core::messages;

/// Form submission; absent fields are treated as empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Body returned for a successful check-in
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub status: &'static str,
    pub message: String,
    pub attendee: Attendee,
    pub persisted: bool,
    /// Banner text, present only for the goal-reaching check-in
    pub celebration: Option<String>,
    pub goal: Option<GoalOutcome>,
}

impl From<CheckInReceipt> for CheckInResponse {
    fn from(receipt: CheckInReceipt) -> Self {
        Self {
            status: "success",
            message: messages::welcome(&receipt.attendee.name, receipt.attendee.team),
            celebration: receipt.goal.as_ref().map(messages::celebration),
            attendee: receipt.attendee,
            persisted: receipt.persisted,
            goal: receipt.goal,
        }
    }
}
