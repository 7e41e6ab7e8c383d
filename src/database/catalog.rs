//! Catalog loading and integrity checks
//!
//! The catalog is the fixture dataset every page queries. It is loaded once,
//! either from the copy embedded in the binary or from a JSON file, and never
//! mutated afterwards.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use crate::config::CatalogConfig;
use crate::models::{Event, SportCategory, User};
use crate::utils::errors::{SportsBuddyError, Result};

const EMBEDDED_FIXTURE: &str = include_str!("../../fixtures/mock_data.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    #[serde(default)]
    pub sports: Vec<SportCategory>,
}

impl Catalog {
    /// Dataset shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn new(users: Vec<User>, events: Vec<Event>, sports: Vec<SportCategory>) -> Self {
        Self { users, events, sports }
    }
}

/// Load the catalog described by the configuration
pub async fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    let catalog = match &config.fixture_path {
        Some(path) => {
            debug!(path = %path, "Loading catalog from file");
            let raw = tokio::fs::read_to_string(path).await?;
            Catalog::from_json(&raw)?
        }
        None => Catalog::embedded()?,
    };

    if config.validate_references {
        check_integrity(&catalog)?;
    }

    info!(
        users = catalog.users.len(),
        events = catalog.events.len(),
        sports = catalog.sports.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Verify that every id reference in the catalog resolves
///
/// Duplicate ids and dangling host/participant/membership references are
/// errors. Participant lists above capacity are only logged.
pub fn check_integrity(catalog: &Catalog) -> Result<()> {
    let mut user_ids = HashSet::new();
    for user in &catalog.users {
        if !user_ids.insert(user.id.as_str()) {
            return Err(SportsBuddyError::Integrity(format!("duplicate user id {}", user.id)));
        }
    }

    let mut event_ids = HashSet::new();
    for event in &catalog.events {
        if !event_ids.insert(event.id.as_str()) {
            return Err(SportsBuddyError::Integrity(format!("duplicate event id {}", event.id)));
        }
    }

    for event in &catalog.events {
        if !user_ids.contains(event.host.as_str()) {
            return Err(SportsBuddyError::Integrity(format!(
                "event {} is hosted by unknown user {}",
                event.id, event.host
            )));
        }

        if let Some(missing) = event.participants.iter().find(|id| !user_ids.contains(id.as_str())) {
            return Err(SportsBuddyError::Integrity(format!(
                "event {} lists unknown participant {}",
                event.id, missing
            )));
        }

        if event.participants.len() > event.max_participants as usize {
            warn!(
                event_id = %event.id,
                participants = event.participants.len(),
                max_participants = event.max_participants,
                "Event is over capacity"
            );
        }
    }

    for user in &catalog.users {
        if let Some(missing) = user.events.iter().find(|id| !event_ids.contains(id.as_str())) {
            return Err(SportsBuddyError::Integrity(format!(
                "user {} references unknown event {}",
                user.id, missing
            )));
        }
    }

    Ok(())
}
