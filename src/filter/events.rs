//! Event criteria

use super::QueryParams;
use serde::{Deserialize, Serialize};
use crate::models::{Event, SkillLevel};
use crate::utils::errors::Result;
use crate::utils::helpers::non_empty;
use super::{contains_ignore_case, LocationMatch, RecordFilter};

/// Criteria for the events listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Case-insensitive match against title or description
    pub search: Option<String>,
    /// Exact sport name
    pub sport: Option<String>,
    /// Exact required skill level
    pub skill_level: Option<SkillLevel>,
    /// Substring of the event location
    pub location: Option<String>,
    #[serde(default)]
    pub location_match: LocationMatch,
}

impl EventFilter {
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

    /// Build criteria from query parameters (`search`, `sport`, `level`, `location`)
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

    /// Clear every criterion, keeping the location matching mode
    pub fn reset(&mut self) {
        *self = Self {
            location_match: self.location_match,
            ..Self::default()
        };
    }
}

impl RecordFilter<Event> for EventFilter {
    fn matches(&self, event: &Event) -> bool {
        if let Some(search) = &self.search {
            if !contains_ignore_case(&event.title, search)
                && !contains_ignore_case(&event.description, search)
            {
                return false;
            }
        }

        if let Some(sport) = &self.sport {
            if event.sport != *sport {
                return false;
            }
        }

        if let Some(level) = self.skill_level {
            if event.skill_level != level {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !self.location_match.matches(&event.location, location) {
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
