//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod event;

// Re-export commonly used services
pub use auth::{AuthService, AuthContext, Permission};
pub use event::EventService;

use crate::config::settings::Settings;
use crate::filter::{EventFilter, LocationMatch, UserFilter};

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub event_service: EventService,
    location_match: LocationMatch,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Self {
        let auth_service = AuthService::new();
        Self {
            event_service: EventService::new(auth_service.clone()),
            auth_service,
            location_match: LocationMatch::from_flag(settings.filter.case_insensitive_location),
        }
    }

    /// Empty event criteria carrying the configured location matching mode
    pub fn event_filter(&self) -> EventFilter {
        EventFilter::new().with_location_match(self.location_match)
    }

    /// Empty buddy criteria carrying the configured location matching mode
    pub fn user_filter(&self) -> UserFilter {
        UserFilter::new().with_location_match(self.location_match)
    }

    pub fn location_match(&self) -> LocationMatch {
        self.location_match
    }
}
