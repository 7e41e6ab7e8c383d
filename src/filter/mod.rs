//! Filter engine
//!
//! Pure predicates that narrow event and user lists. Every supplied criterion
//! must match (logical AND); absent criteria are skipped. Output keeps the
//! input order.

pub mod events;
pub mod users;

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

pub use events::EventFilter;
pub use users::UserFilter;

/// Decoded URL query parameters
pub type QueryParams = BTreeMap<String, String>;

/// How the location criterion compares against a record's location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMatch {
    /// Plain substring containment, the historical behaviour
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

impl LocationMatch {
    pub fn from_flag(case_insensitive: bool) -> Self {
        if case_insensitive {
            LocationMatch::CaseInsensitive
        } else {
            LocationMatch::CaseSensitive
        }
    }

    pub fn matches(&self, location: &str, needle: &str) -> bool {
        match self {
            LocationMatch::CaseSensitive => location.contains(needle),
            LocationMatch::CaseInsensitive => contains_ignore_case(location, needle),
        }
    }
}

/// Criteria that can be evaluated against one record type
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;

    /// Number of criteria currently set
    fn active_criteria(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.active_criteria() == 0
    }

    /// Stable filter returning owned copies of the matching records
    fn apply(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.select(records).into_iter().cloned().collect()
    }

    /// Stable filter returning references into `records`
    fn select<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_match_modes() {
        assert!(LocationMatch::CaseSensitive.matches("Chicago, IL", "Chicago"));
        assert!(!LocationMatch::CaseSensitive.matches("Chicago, IL", "chicago"));
        assert!(LocationMatch::CaseInsensitive.matches("Chicago, IL", "chicago"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Pickup Basketball Game", "BASKET"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Tennis", "golf"));
    }
}
