//! Event repository implementation

use std::sync::Arc;
use crate::models::event::Event;
use crate::utils::helpers::unique_in_order;

#[derive(Debug, Clone)]
pub struct EventRepository {
    events: Arc<Vec<Event>>,
}

impl EventRepository {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events: Arc::new(events) }
    }

    /// All events in catalog order
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }

    /// Find event by ID
    pub fn find_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// First `limit` events, shown on the home page
    pub fn featured(&self, limit: usize) -> Vec<Event> {
        self.events.iter().take(limit).cloned().collect()
    }

    /// Events hosted by a user
    pub fn hosted_by(&self, user_id: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.is_hosted_by(user_id))
            .cloned()
            .collect()
    }

    /// Distinct event locations in first-seen order
    pub fn locations(&self) -> Vec<String> {
        unique_in_order(self.events.iter().map(|event| event.location.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Catalog;

    fn repository() -> EventRepository {
        EventRepository::new(Catalog::embedded().unwrap().events)
    }

    #[test]
    fn test_featured_takes_leading_events() {
        let events = repository();
        let featured = events.featured(3);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured[0].id, events.list()[0].id);
        assert_eq!(events.featured(100).len(), events.count());
    }

    #[test]
    fn test_hosted_by() {
        let events = repository();
        let hosted = events.hosted_by("2");
        assert!(!hosted.is_empty());
        assert!(hosted.iter().all(|e| e.host == "2"));
    }

    #[test]
    fn test_find_by_id_misses_unknown() {
        assert!(repository().find_by_id("does-not-exist").is_none());
    }
}
