//! Event participation service
//!
//! Join and leave produce an updated copy of the event for the caller's view
//! state. Nothing is written back to the catalog.

use tracing::debug;
use crate::models::{Event, User};
use crate::utils::errors::{SportsBuddyError, Result};
use crate::utils::logging::log_event_action;
use super::auth::{AuthService, Permission};

#[derive(Debug, Clone, Default)]
pub struct EventService {
    auth: AuthService,
}

impl EventService {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    /// Add the signed-in user to `event`
    ///
    /// Joining twice is a no-op. A full event is rejected.
    pub fn join(&self, user: Option<&User>, event: &Event) -> Result<Event> {
        match user {
            Some(user) if event.is_participant(&user.id) => {
                debug!(event_id = %event.id, user_id = %user.id, "Already participating");
                return Ok(event.clone());
            }
            Some(_) if event.is_full() => {
                return Err(SportsBuddyError::EventFull { event_id: event.id.clone() });
            }
            _ => {}
        }

        let context = self.auth.require(user, Some(event), Permission::JoinEvent)?;
        let mut updated = event.clone();
        if let Some(user_id) = context.user_id {
            log_event_action(&event.id, "join", &user_id, None);
            updated.participants.push(user_id);
        }
        Ok(updated)
    }

    /// Remove the signed-in user from `event`; leaving when not joined is a no-op
    pub fn leave(&self, user: Option<&User>, event: &Event) -> Result<Event> {
        if let Some(user) = user.filter(|user| !event.is_participant(&user.id)) {
            debug!(event_id = %event.id, user_id = %user.id, "Not participating");
            return Ok(event.clone());
        }

        let context = self.auth.require(user, Some(event), Permission::LeaveEvent)?;
        let mut updated = event.clone();
        if let Some(user_id) = context.user_id {
            updated.participants.retain(|id| *id != user_id);
            log_event_action(&event.id, "leave", &user_id, None);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::database::Catalog;

    fn pick(catalog: &Catalog, event_id: &str, user_id: &str) -> (Event, User) {
        let event = catalog.events.iter().find(|e| e.id == event_id).unwrap().clone();
        let user = catalog.users.iter().find(|u| u.id == user_id).unwrap().clone();
        (event, user)
    }

    #[test]
    fn test_join_appends_and_is_idempotent() {
        let catalog = Catalog::embedded().unwrap();
        let (event, user) = pick(&catalog, "8", "8");
        let service = EventService::default();

        let joined = service.join(Some(&user), &event).unwrap();
        assert_eq!(joined.participants.last(), Some(&user.id));
        assert_eq!(joined.participants.len(), event.participants.len() + 1);

        let again = service.join(Some(&user), &joined).unwrap();
        assert_eq!(again, joined);
    }

    #[test]
    fn test_join_requires_user() {
        let catalog = Catalog::embedded().unwrap();
        let (event, _) = pick(&catalog, "8", "8");
        assert_matches!(EventService::default().join(None, &event), Err(SportsBuddyError::State(_)));
    }

    #[test]
    fn test_join_rejects_full_event() {
        let catalog = Catalog::embedded().unwrap();
        let (mut event, user) = pick(&catalog, "8", "8");
        event.max_participants = event.participants.len() as u32;
        assert_matches!(
            EventService::default().join(Some(&user), &event),
            Err(SportsBuddyError::EventFull { .. })
        );
    }

    #[test]
    fn test_leave_requires_user() {
        let catalog = Catalog::embedded().unwrap();
        let (event, _) = pick(&catalog, "1", "5");
        assert_matches!(EventService::default().leave(None, &event), Err(SportsBuddyError::State(_)));
    }

    #[test]
    fn test_leave_keeps_other_participants_in_order() {
        let catalog = Catalog::embedded().unwrap();
        let (event, user) = pick(&catalog, "1", "5");
        let left = EventService::default().leave(Some(&user), &event).unwrap();
        assert_eq!(left.participants, vec!["1".to_string(), "7".to_string()]);

        let again = EventService::default().leave(Some(&user), &left).unwrap();
        assert_eq!(again, left);
    }
}
