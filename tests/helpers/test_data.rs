//! Test data helpers for building catalog records

use chrono::{NaiveDate, NaiveTime};
use SportsBuddy::models::{Event, Skill, SkillLevel, User};

pub fn create_test_user(id: &str, name: &str, location: &str, skills: &[(&str, SkillLevel)]) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("user{}@example.com", id),
        avatar: format!("https://images.example.com/avatars/{}.jpg", id),
        location: location.to_string(),
        bio: String::new(),
        skills: skills
            .iter()
            .map(|(sport, level)| Skill::new(*sport, *level))
            .collect(),
        events: vec![],
        is_admin: None,
    }
}

pub fn create_test_event(id: &str, sport: &str, level: SkillLevel, location: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("{} session {}", sport, id),
        description: format!("Casual {} meetup", sport.to_lowercase()),
        sport: sport.to_string(),
        skill_level: level,
        location: location.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
        time: NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"),
        duration: 60,
        max_participants: 10,
        participants: vec![],
        host: "1".to_string(),
        image: String::new(),
    }
}

/// The five-event list used by the sport filter example
pub fn five_events() -> Vec<Event> {
    vec![
        create_test_event("a", "Basketball", SkillLevel::Beginner, "Austin, TX"),
        create_test_event("b", "Basketball", SkillLevel::Advanced, "Austin, TX"),
        create_test_event("c", "Tennis", SkillLevel::Advanced, "Denver, CO"),
        create_test_event("d", "Football", SkillLevel::Beginner, "Denver, CO"),
        create_test_event("e", "Tennis", SkillLevel::Intermediate, "Boston, MA"),
    ]
}

pub const SKILL_LEVELS: [SkillLevel; 4] = SkillLevel::ALL;
