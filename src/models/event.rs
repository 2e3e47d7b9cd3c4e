use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a calendar event; drives the chip color in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Work,
    Holiday,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Work, EventType::Holiday, EventType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Work => "work",
            EventType::Holiday => "holiday",
            EventType::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventType::Work => "Work",
            EventType::Holiday => "Holiday",
            EventType::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// An event as stored by the service. `start_date`/`end_date` are absolute
/// instants; ownership is informational only (no access control).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub applies_to_both: bool,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
}

impl Event {
    pub fn is_shared(&self) -> bool {
        self.applies_to_both
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date >= now
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_date - self.start_date
    }
}

/// Request body for POST /events and PUT /events/{id}. The id is assigned by
/// the service and never sent.
#[derive(Debug, Clone, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub applies_to_both: bool,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_event() -> Event {
        Event {
            id: 1,
            title: "Team offsite".to_string(),
            description: Some("Two days in the mountains".to_string()),
            event_type: EventType::Work,
            start_date: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap(),
            applies_to_both: false,
            user_id: 1,
            user_name: "Andrea".to_string(),
        }
    }

    #[test]
    fn test_event_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventType::Holiday).unwrap(),
            "\"holiday\""
        );
        let parsed: EventType = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(parsed, EventType::Work);
    }

    #[test]
    fn test_event_deserializes_instant_strings() {
        let json = r#"{
            "id": 5,
            "title": "Dentist",
            "description": null,
            "event_type": "other",
            "start_date": "2024-03-10T08:00:00Z",
            "end_date": "2024-03-10T09:00:00Z",
            "applies_to_both": false,
            "user_id": 2,
            "user_name": "Angel"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 5);
        assert_eq!(event.event_type, EventType::Other);
        assert_eq!(
            event.start_date,
            Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_event_deserializes_without_user_name() {
        let json = r#"{
            "id": 6,
            "title": "Solo",
            "description": null,
            "event_type": "work",
            "start_date": "2024-03-10T08:00:00Z",
            "end_date": "2024-03-10T09:00:00Z",
            "applies_to_both": true,
            "user_id": 2
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.user_name, "");
        assert!(event.is_shared());
    }

    #[test]
    fn test_event_is_upcoming() {
        let event = sample_event();
        let before = event.start_date - Duration::hours(1);
        let after = event.start_date + Duration::hours(1);
        assert!(event.is_upcoming(before));
        assert!(!event.is_upcoming(after));
    }

    #[test]
    fn test_event_duration() {
        let event = sample_event();
        assert_eq!(event.duration(), Duration::hours(49));
    }

    #[test]
    fn test_payload_serializes_expected_fields() {
        let payload = EventPayload {
            title: "Dinner".to_string(),
            description: String::new(),
            event_type: EventType::Other,
            start_date: Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap(),
            applies_to_both: true,
            user_id: 1,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "title",
            "description",
            "event_type",
            "start_date",
            "end_date",
            "applies_to_both",
            "user_id",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert!(object.get("id").is_none());
        assert_eq!(object["event_type"], "other");
    }
}
