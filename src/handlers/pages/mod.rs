//! Page view models
//!
//! Each page module turns catalog records and the session into a serializable
//! model that a view layer can render directly.

pub mod auth;
pub mod buddies;
pub mod event_details;
pub mod events;
pub mod home;
pub mod profile;

pub use auth::{AuthPage, LoginForm, SignupForm};
pub use buddies::BuddiesPage;
pub use event_details::EventDetailsPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use profile::ProfilePage;

use serde::Serialize;
use crate::models::{Event, Skill, SkillLevel, User};
use crate::utils::helpers::format_short_date;
use super::routes::Route;

/// Rendered page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum Page {
    Home(HomePage),
    Events(EventsPage),
    EventDetails(EventDetailsPage),
    Buddies(BuddiesPage),
    Login(AuthPage),
    Signup(AuthPage),
    Profile(ProfilePage),
    NotFound(NotFoundPage),
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundPage {
    pub path: String,
    pub home_link: String,
}

impl NotFoundPage {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            home_link: Route::Home.path(),
        }
    }
}

/// Event summary shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub sport: String,
    pub skill_level: SkillLevel,
    pub location: String,
    /// e.g. "Sat, Jun 14 • 18:00"
    pub schedule: String,
    /// e.g. "3 / 10 participants"
    pub participants: String,
    pub link: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            image: event.image.clone(),
            sport: event.sport.clone(),
            skill_level: event.skill_level,
            location: event.location.clone(),
            schedule: format!(
                "{} • {}",
                format_short_date(event.date),
                event.time.format("%H:%M")
            ),
            participants: format!(
                "{} / {} participants",
                event.participants.len(),
                event.max_participants
            ),
            link: Route::event_details(&event.id).path(),
        }
    }
}

/// Person summary shown in listings and participant lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCard {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<Skill>,
    pub link: String,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            location: fallback(&user.location, "No location set"),
            bio: fallback(&user.bio, "No bio available"),
            skills: user.skills.clone(),
            link: format!("/buddies/{}", urlencoding::encode(&user.id)),
        }
    }
}

fn fallback(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Catalog;

    #[test]
    fn test_event_card_labels() {
        let catalog = Catalog::embedded().unwrap();
        let card = EventCard::from(&catalog.events[0]);
        assert_eq!(card.schedule, "Sat, Jun 14 • 18:00");
        assert_eq!(card.participants, "3 / 10 participants");
        assert_eq!(card.link, "/events/1");
    }

    #[test]
    fn test_user_card_placeholders() {
        let catalog = Catalog::embedded().unwrap();
        let mut user = catalog.users[0].clone();
        user.location.clear();
        user.bio.clear();

        let card = UserCard::from(&user);
        assert_eq!(card.location, "No location set");
        assert_eq!(card.bio, "No bio available");
    }
}
