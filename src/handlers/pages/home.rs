//! Landing page

use serde::Serialize;
use crate::handlers::routes::Route;
use crate::models::SportCategory;
use crate::state::AppContext;
use super::{EventCard, UserCard};

/// Sport tile linking to the pre-filtered events listing
#[derive(Debug, Clone, Serialize)]
pub struct SportTile {
    #[serde(flatten)]
    pub sport: SportCategory,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub featured_events: Vec<EventCard>,
    pub featured_users: Vec<UserCard>,
    pub sports: Vec<SportTile>,
    pub is_authenticated: bool,
}

pub fn load(ctx: &AppContext) -> HomePage {
    let catalog = &ctx.settings.catalog;

    HomePage {
        featured_events: ctx
            .database
            .events
            .featured(catalog.featured_events)
            .iter()
            .map(EventCard::from)
            .collect(),
        featured_users: ctx
            .database
            .users
            .featured(catalog.featured_users)
            .iter()
            .map(UserCard::from)
            .collect(),
        sports: ctx
            .database
            .sports
            .list()
            .iter()
            .map(|sport| SportTile {
                sport: sport.clone(),
                link: Route::events_for_sport(&sport.name).path(),
            })
            .collect(),
        is_authenticated: ctx.session.is_authenticated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_shows_featured_slices() {
        let ctx = AppContext::for_tests().await;
        let page = load(&ctx);

        assert_eq!(page.featured_events.len(), 3);
        assert_eq!(page.featured_users.len(), 4);
        assert_eq!(page.featured_events[0].id, "1");
        assert_eq!(page.sports.len(), ctx.database.sports.list().len());
        assert!(page.sports[0].link.starts_with("/events?sport="));
        assert!(!page.is_authenticated);
    }
}
