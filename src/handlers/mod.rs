//! Navigation handlers
//!
//! This module maps paths onto page view models:
//! - Route parsing and the route table
//! - Access rules that turn some requests into redirects
//! - Page builders for every screen

pub mod pages;
pub mod routes;

pub use pages::{EventCard, Page, UserCard};
pub use routes::Route;

use serde::Serialize;
use tracing::{debug, info, warn};
use crate::state::AppContext;
use crate::utils::errors::{Result, SportsBuddyError};
use pages::{auth, buddies, event_details, events, home, profile, EventDetailsPage, NotFoundPage};

/// Redirect chains longer than this are treated as a loop
const MAX_REDIRECTS: usize = 4;

/// Outcome of resolving one route
#[derive(Debug, Clone)]
pub enum Resolution {
    Render(Page),
    Redirect(Route),
}

/// Final page for a request, with the redirects taken on the way
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub path: String,
    pub redirected_from: Vec<String>,
    pub page: Page,
}

/// Resolve a single route against the current session
pub fn resolve(ctx: &AppContext, route: &Route) -> Result<Resolution> {
    let authenticated = ctx.session.is_authenticated();

    if route.requires_auth() && !authenticated {
        return Ok(Resolution::Redirect(Route::Login));
    }
    if route.guest_only() && authenticated {
        return Ok(Resolution::Redirect(Route::Home));
    }

    let page = match route {
        Route::Home => Page::Home(home::load(ctx)),
        Route::Events { query } => Page::Events(events::load(ctx, query)?),
        Route::EventDetails { event_id } => match event_details::load(ctx, event_id) {
            Ok(page) => Page::EventDetails(page),
            Err(SportsBuddyError::EventNotFound { .. }) => {
                debug!(event_id = %event_id, "Unknown event, back to listing");
                return Ok(Resolution::Redirect(Route::events()));
            }
            Err(e) => return Err(e),
        },
        Route::Buddies { query } => Page::Buddies(buddies::load(ctx, query)?),
        Route::Login => Page::Login(auth::load(ctx)),
        Route::Signup => Page::Signup(auth::load(ctx)),
        Route::Profile => match profile::load(ctx) {
            Some(page) => Page::Profile(page),
            None => return Ok(Resolution::Redirect(Route::Login)),
        },
        Route::NotFound { path } => Page::NotFound(NotFoundPage::new(path)),
    };

    Ok(Resolution::Render(page))
}

/// Parse `path`, follow redirects and return the page to show
pub async fn handle_request(ctx: &AppContext, path: &str) -> Result<Response> {
    let mut route = Route::parse(path)?;
    let mut redirected_from = Vec::new();

    loop {
        match resolve(ctx, &route)? {
            Resolution::Render(page) => {
                info!(path = %route.path(), redirects = redirected_from.len(), "Page rendered");
                return Ok(Response {
                    path: route.path(),
                    redirected_from,
                    page,
                });
            }
            Resolution::Redirect(next) => {
                if redirected_from.len() >= MAX_REDIRECTS {
                    warn!(path = %route.path(), "Redirect limit reached");
                    return Err(SportsBuddyError::State(format!(
                        "Too many redirects starting at {}",
                        path
                    )));
                }
                debug!(from = %route.path(), to = %next.path(), "Redirect");
                redirected_from.push(route.path());
                route = next;
            }
        }
    }
}

/// Join from the details page; anonymous visitors are sent to the login page
pub fn join_event(ctx: &AppContext, page: &EventDetailsPage) -> Result<Resolution> {
    match page.join(ctx) {
        Ok(updated) => Ok(Resolution::Render(Page::EventDetails(updated))),
        Err(SportsBuddyError::State(_)) if !ctx.session.is_authenticated() => {
            Ok(Resolution::Redirect(Route::Login))
        }
        Err(e) => Err(e),
    }
}

/// Leave from the details page
pub fn leave_event(ctx: &AppContext, page: &EventDetailsPage) -> Result<Resolution> {
    page.leave(ctx)
        .map(|updated| Resolution::Render(Page::EventDetails(updated)))
}

/// Sign out and return to the landing page
pub async fn logout(ctx: &AppContext) -> Result<Route> {
    ctx.session.logout().await?;
    Ok(Route::Home)
}
