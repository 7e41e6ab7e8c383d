//! Signed-in user's profile

use serde::Serialize;
use crate::models::{ProfileUpdate, User};
use crate::services::Permission;
use crate::state::AppContext;
use crate::utils::errors::Result;
use super::EventCard;

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub user: User,
    pub joined_events: Vec<EventCard>,
    pub hosted_events: Vec<EventCard>,
    pub can_access_admin: bool,
}

/// Build the page for the current user; `None` when nobody is signed in
pub fn load(ctx: &AppContext) -> Option<ProfilePage> {
    ctx.session.current_user().map(|user| build(ctx, user))
}

/// Apply `update` through the session and rebuild the page
pub async fn submit_update(ctx: &AppContext, update: ProfileUpdate) -> Result<ProfilePage> {
    let user = ctx.session.update_profile(update).await?;
    Ok(build(ctx, user))
}

fn build(ctx: &AppContext, user: User) -> ProfilePage {
    let auth = ctx.services.auth_service.auth_context(Some(&user), None);

    ProfilePage {
        joined_events: ctx.database.events_of(&user).iter().map(EventCard::from).collect(),
        hosted_events: ctx
            .database
            .events
            .hosted_by(&user.id)
            .iter()
            .map(EventCard::from)
            .collect(),
        can_access_admin: auth.allows(Permission::AccessAdmin),
        user,
    }
}
