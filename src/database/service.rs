//! Record store service layer
//!
//! This module provides a high-level interface to catalog queries

use tracing::debug;
use crate::config::CatalogConfig;
use crate::database::{Catalog, UserRepository, EventRepository, SportRepository, load_catalog};
use crate::models::*;
use crate::utils::errors::{SportsBuddyError, Result};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub sports: SportRepository,
}

impl DatabaseService {
    pub fn new(catalog: Catalog) -> Self {
        let Catalog { users, events, sports } = catalog;
        Self {
            users: UserRepository::new(users),
            events: EventRepository::new(events),
            sports: SportRepository::new(sports),
        }
    }

    /// Load the configured catalog and wrap it in repositories
    pub async fn load(config: &CatalogConfig) -> Result<Self> {
        Ok(Self::new(load_catalog(config).await?))
    }

    /// Get an event by id or fail
    pub fn get_event(&self, event_id: &str) -> Result<Event> {
        self.events
            .find_by_id(event_id)
            .cloned()
            .ok_or_else(|| SportsBuddyError::EventNotFound { event_id: event_id.to_string() })
    }

    /// Host user record of an event
    pub fn host_of(&self, event: &Event) -> Option<User> {
        self.users.find_by_id(&event.host).cloned()
    }

    /// Participant records of an event, in catalog order
    pub fn participants_of(&self, event: &Event) -> Vec<User> {
        let participants = self.users.find_many(&event.participants);
        debug!(event_id = %event.id, count = participants.len(), "Resolved event participants");
        participants
    }

    /// Events a user takes part in, in catalog order
    pub fn events_of(&self, user: &User) -> Vec<Event> {
        self.events
            .list()
            .iter()
            .filter(|event| user.events.contains(&event.id))
            .cloned()
            .collect()
    }
}
