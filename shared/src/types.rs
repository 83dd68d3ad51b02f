//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::SharedError;

/// Attendance target that triggers the one-time goal evaluation
pub const GOAL: u64 = 50;

/// Key under which the check-in state is persisted
pub const STORAGE_KEY: &str = "intelSummitCheckIn_v1";

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any component in the system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Command line check-in tool
    Cli,
    /// HTTP front end
    WebServer,
}

impl ProcessId {
    /// Initialize the global process ID for the CLI
    pub fn init_cli() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Cli)
    }

    /// Initialize the global process ID for webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Get the global process ID, falling back to the CLI identity when
    /// nothing has been initialized (library use, tests)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Cli)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Cli => write!(f, "checkin"),
            ProcessId::WebServer => write!(f, "webserver"),
        }
    }
}

/// The three competing teams. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamId {
    Water,
    Zero,
    Power,
}

impl TeamId {
    /// Every team in declaration order; also the stable order for tie listings
    pub const ALL: [TeamId; 3] = [TeamId::Water, TeamId::Zero, TeamId::Power];

    /// Storage / form key
    pub fn key(&self) -> &'static str {
        match self {
            TeamId::Water => "water",
            TeamId::Zero => "zero",
            TeamId::Power => "power",
        }
    }

    /// Human readable team name
    pub fn label(&self) -> &'static str {
        match self {
            TeamId::Water => "Team Water Wise",
            TeamId::Zero => "Team Net Zero",
            TeamId::Power => "Team Renewables",
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for TeamId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "water" => Ok(TeamId::Water),
            "zero" => Ok(TeamId::Zero),
            "power" => Ok(TeamId::Power),
            _ => Err(SharedError::UnknownTeam { input: s.to_string() }),
        }
    }
}

/// Per-team check-in counts
///
/// Serialized as a map with exactly the three team keys; every key is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCounts {
    pub water: u64,
    pub zero: u64,
    pub power: u64,
}

impl TeamCounts {
    pub fn get(&self, team: TeamId) -> u64 {
        match team {
            TeamId::Water => self.water,
            TeamId::Zero => self.zero,
            TeamId::Power => self.power,
        }
    }

    pub fn increment(&mut self, team: TeamId) {
        match team {
            TeamId::Water => self.water += 1,
            TeamId::Zero => self.zero += 1,
            TeamId::Power => self.power += 1,
        }
    }

    pub fn sum(&self) -> u64 {
        self.water + self.zero + self.power
    }

    /// Counts in `TeamId::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, u64)> + '_ {
        TeamId::ALL.into_iter().map(move |team| (team, self.get(team)))
    }
}

/// One check-in record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub team: TeamId,
}

impl Attendee {
    pub fn new(name: impl Into<String>, team: TeamId) -> Self {
        Self {
            name: name.into(),
            team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_parsing() {
        assert_eq!("water".parse::<TeamId>().unwrap(), TeamId::Water);
        assert_eq!(" Zero ".parse::<TeamId>().unwrap(), TeamId::Zero);
        assert_eq!("POWER".parse::<TeamId>().unwrap(), TeamId::Power);

        let err = "wind".parse::<TeamId>().unwrap_err();
        assert!(matches!(err, SharedError::UnknownTeam { ref input } if input == "wind"));
        assert!("".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_team_labels_and_keys() {
        assert_eq!(TeamId::Water.label(), "Team Water Wise");
        assert_eq!(TeamId::Zero.label(), "Team Net Zero");
        assert_eq!(TeamId::Power.label(), "Team Renewables");
        assert_eq!(TeamId::Power.to_string(), "power");
    }

    #[test]
    fn test_team_counts() {
        let mut counts = TeamCounts::default();
        counts.increment(TeamId::Water);
        counts.increment(TeamId::Water);
        counts.increment(TeamId::Power);

        assert_eq!(counts.get(TeamId::Water), 2);
        assert_eq!(counts.get(TeamId::Zero), 0);
        assert_eq!(counts.sum(), 3);

        let ordered: Vec<_> = counts.iter().collect();
        assert_eq!(
            ordered,
            vec![(TeamId::Water, 2), (TeamId::Zero, 0), (TeamId::Power, 1)]
        );
    }

    #[test]
    fn test_attendee_serialization_layout() {
        let attendee = Attendee::new("Ann Lee", TeamId::Water);
        let json = serde_json::to_value(&attendee).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ann Lee", "team": "water" }));
    }

    #[test]
    fn test_team_counts_require_every_key() {
        let missing = serde_json::from_str::<TeamCounts>(r#"{"water": 1, "zero": 2}"#);
        assert!(missing.is_err());

        let non_numeric = serde_json::from_str::<TeamCounts>(r#"{"water": "1", "zero": 2, "power": 0}"#);
        assert!(non_numeric.is_err());
    }

    #[test]
    fn test_process_id_display() {
        assert_eq!(ProcessId::Cli.to_string(), "checkin");
        assert_eq!(ProcessId::WebServer.to_string(), "webserver");
    }
}
