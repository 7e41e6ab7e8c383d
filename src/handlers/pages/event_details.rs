//! Event details
//!
//! The page owns a transient copy of the event. Join and leave rebuild the
//! page from an updated copy; the catalog itself is never modified, so a
//! fresh load shows the original participants again.

use serde::Serialize;
use tracing::debug;
use crate::handlers::routes::Route;
use crate::models::Event;
use crate::services::Permission;
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::helpers::{format_duration, format_long_date, format_time};
use super::UserCard;

#[derive(Debug, Clone, Serialize)]
pub struct EventDetailsPage {
    pub event: Event,
    /// Missing only when the host id does not resolve
    pub host: Option<UserCard>,
    pub participants: Vec<UserCard>,
    pub is_participating: bool,
    pub is_host: bool,
    pub is_full: bool,
    pub can_join: bool,
    pub can_leave: bool,
    pub can_manage: bool,
    /// e.g. "Saturday, June 14, 2025"
    pub date: String,
    /// e.g. "6:00 PM"
    pub time: String,
    pub duration: String,
    /// e.g. "3 of 10 spots filled"
    pub spots: String,
    pub spots_left: u32,
    pub back_link: String,
}

/// Load the page for `event_id`; unknown ids give `EventNotFound`
pub fn load(ctx: &AppContext, event_id: &str) -> Result<EventDetailsPage> {
    let event = ctx.database.get_event(event_id)?;
    let participants = ctx
        .database
        .participants_of(&event)
        .iter()
        .map(UserCard::from)
        .collect();
    Ok(EventDetailsPage::build(ctx, event, participants))
}

impl EventDetailsPage {
    fn build(ctx: &AppContext, event: Event, participants: Vec<UserCard>) -> Self {
        let viewer = ctx.session.current_user();
        let auth = ctx
            .services
            .auth_service
            .auth_context(viewer.as_ref(), Some(&event));

        let host = ctx.database.host_of(&event).as_ref().map(UserCard::from);
        if host.is_none() {
            debug!(event_id = %event.id, host = %event.host, "Event host not in catalog");
        }

        Self {
            host,
            participants,
            is_participating: auth.is_participant,
            is_host: auth.is_host,
            is_full: event.is_full(),
            can_join: auth.allows(Permission::JoinEvent),
            can_leave: auth.allows(Permission::LeaveEvent),
            can_manage: auth.allows(Permission::ManageEvent),
            date: format_long_date(event.date),
            time: format_time(event.time),
            duration: format_duration(event.duration),
            spots: format!(
                "{} of {} spots filled",
                event.participants.len(),
                event.max_participants
            ),
            spots_left: event.spots_left(),
            back_link: Route::events().path(),
            event,
        }
    }

    /// Add the signed-in user to this page's copy of the event
    ///
    /// The joiner's card goes to the end of the list, after the cards the
    /// page already shows.
    pub fn join(&self, ctx: &AppContext) -> Result<Self> {
        let user = ctx.session.current_user();
        let updated = ctx.services.event_service.join(user.as_ref(), &self.event)?;

        let mut participants = self.participants.clone();
        if let Some(user) = user {
            if updated.is_participant(&user.id) && !participants.iter().any(|card| card.id == user.id) {
                participants.push(UserCard::from(&user));
            }
        }
        Ok(Self::build(ctx, updated, participants))
    }

    /// Remove the signed-in user from this page's copy of the event
    pub fn leave(&self, ctx: &AppContext) -> Result<Self> {
        let user = ctx.session.current_user();
        let updated = ctx.services.event_service.leave(user.as_ref(), &self.event)?;

        let mut participants = self.participants.clone();
        participants.retain(|card| updated.is_participant(&card.id));
        Ok(Self::build(ctx, updated, participants))
    }
}
