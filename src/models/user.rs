//! User model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::SportsBuddyError;

/// Proficiency tier, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Professional => "Professional",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = SportsBuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| SportsBuddyError::InvalidInput(format!("Unknown skill level: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub sport: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(sport: impl Into<String>, level: SkillLevel) -> Self {
        Self { sport: sport.into(), level }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<Skill>,
    pub events: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.is_admin.unwrap_or(false)
    }

    pub fn has_skill_in(&self, sport: &str) -> bool {
        self.skills.iter().any(|skill| skill.sport == sport)
    }

    pub fn has_skill_at(&self, level: SkillLevel) -> bool {
        self.skills.iter().any(|skill| skill.level == level)
    }

    /// Merge a partial profile into this user; the id never changes
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        let ProfileUpdate { name, email, avatar, location, bio, skills, events, is_admin } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if let Some(events) = events {
            self.events = events;
        }
        if let Some(is_admin) = is_admin {
            self.is_admin = Some(is_admin);
        }
    }
}

/// Partial profile fields accepted by the session store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<Skill>>,
    pub events: Option<Vec<String>>,
    pub is_admin: Option<bool>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ProfileUpdate::default()
    }
}
