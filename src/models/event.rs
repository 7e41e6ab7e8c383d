//! Event model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use super::user::SkillLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sport: String,
    pub skill_level: SkillLevel,
    pub location: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    /// Minutes
    pub duration: u32,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub host: String,
    pub image: String,
}

impl Event {
    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|id| id == user_id)
    }

    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.host == user_id
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn spots_left(&self) -> u32 {
        (self.max_participants as usize).saturating_sub(self.participants.len()) as u32
    }
}

/// Time of day as "HH:MM"
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": "1",
            "title": "Pickup Basketball Game",
            "description": "Friendly full-court run",
            "sport": "Basketball",
            "skillLevel": "Intermediate",
            "location": "Central Park Courts, New York, NY",
            "date": "2025-06-14",
            "time": "18:00",
            "duration": 120,
            "maxParticipants": 2,
            "participants": ["1"],
            "host": "1",
            "image": "https://images.example.com/events/basketball.jpg"
        })
    }

    #[test]
    fn test_event_round_trips_clock_time() {
        let event: Event = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(event.time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(event.skill_level, SkillLevel::Intermediate);

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["time"], "18:00");
        assert_eq!(back["maxParticipants"], 2);
    }

    #[test]
    fn test_capacity_helpers() {
        let mut event: Event = serde_json::from_value(sample_json()).unwrap();
        assert!(!event.is_full());
        assert_eq!(event.spots_left(), 1);

        event.participants.push("2".to_string());
        assert!(event.is_full());
        assert_eq!(event.spots_left(), 0);

        event.participants.push("3".to_string());
        assert_eq!(event.spots_left(), 0);
    }

    #[test]
    fn test_rejects_malformed_time() {
        let mut raw = sample_json();
        raw["time"] = json!("6pm");
        assert!(serde_json::from_value::<Event>(raw).is_err());
    }
}
