//! Buddy criteria
//!
//! Sport and skill level are existential over the user's skills: a user
//! matches `sport` if any skill names that sport, and `skill_level` if any
//! skill sits at that level. The two are checked independently, so they may be
//! satisfied by different skills.

use super::QueryParams;
use serde::{Deserialize, Serialize};
use crate::models::{SkillLevel, User};
use crate::utils::errors::Result;
use crate::utils::helpers::non_empty;
use super::{contains_ignore_case, LocationMatch, RecordFilter};

/// Criteria for the buddies listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    /// Case-insensitive match against name or bio
    pub search: Option<String>,
    pub sport: Option<String>,
    pub skill_level: Option<SkillLevel>,
    pub location: Option<String>,
    #[serde(default)]
    pub location_match: LocationMatch,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_empty(Some(search));
        self
    }

    pub fn with_sport(mut self, sport: &str) -> Self {
        self.sport = non_empty(Some(sport));
        self
    }

    pub fn with_skill_level(mut self, level: Option<SkillLevel>) -> Self {
        self.skill_level = level;
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = non_empty(Some(location));
        self
    }

    pub fn with_location_match(mut self, mode: LocationMatch) -> Self {
        self.location_match = mode;
        self
    }

    pub fn from_query(params: &QueryParams) -> Result<Self> {
        let skill_level = match non_empty(params.get("level").map(String::as_str)) {
            Some(level) => Some(level.parse::<SkillLevel>()?),
            None => None,
        };

        Ok(Self {
            search: non_empty(params.get("search").map(String::as_str)),
            sport: non_empty(params.get("sport").map(String::as_str)),
            skill_level,
            location: non_empty(params.get("location").map(String::as_str)),
            location_match: LocationMatch::default(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self {
            location_match: self.location_match,
            ..Self::default()
        };
    }
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        if let Some(search) = &self.search {
            if !contains_ignore_case(&user.name, search) && !contains_ignore_case(&user.bio, search) {
                return false;
            }
        }

        if let Some(sport) = &self.sport {
            if !user.has_skill_in(sport) {
                return false;
            }
        }

        if let Some(level) = self.skill_level {
            if !user.has_skill_at(level) {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !self.location_match.matches(&user.location, location) {
                return false;
            }
        }

        true
    }

    fn active_criteria(&self) -> usize {
        [
            self.search.is_some(),
            self.sport.is_some(),
            self.skill_level.is_some(),
            self.location.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
