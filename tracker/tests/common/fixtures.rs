//! Test fixtures and data for tracker tests

use serde_json::json;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const TEST_KEY: &'static str = "test_checkin_state";

    /// Raw names paired with the canonical form they must produce
    pub fn name_variants() -> Vec<(&'static str, &'static str)> {
        vec![
            ("  ann lee ", "Ann Lee"),
            ("BO CHEN", "Bo Chen"),
            ("carla\t\tdiaz", "Carla Diaz"),
            ("dev   patel", "Dev Patel"),
        ]
    }

    /// Unique attendee names for bulk check-ins
    pub fn guest_names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Guest Number {i}")).collect()
    }

    /// A persisted payload that passes validation
    pub fn valid_payload() -> String {
        json!({
            "total": 2,
            "teams": { "water": 1, "zero": 0, "power": 1 },
            "attendees": [
                { "name": "Ann Lee", "team": "water" },
                { "name": "Bo Chen", "team": "power" }
            ]
        })
        .to_string()
    }

    /// Payloads that must be discarded on load
    pub fn malformed_payloads() -> Vec<String> {
        vec![
            "{".to_string(),
            "   ".to_string(),
            json!({ "total": 1, "teams": { "water": 1, "zero": 0, "power": 0 } }).to_string(),
            json!({
                "total": "1",
                "teams": { "water": 1, "zero": 0, "power": 0 },
                "attendees": [{ "name": "Ann Lee", "team": "water" }]
            })
            .to_string(),
            json!({
                "total": 1,
                "teams": { "water": 1, "power": 0 },
                "attendees": [{ "name": "Ann Lee", "team": "water" }]
            })
            .to_string(),
            json!({
                "total": 1,
                "teams": { "water": 1, "zero": 0, "power": 0 },
                "attendees": "Ann Lee"
            })
            .to_string(),
        ]
    }
}
