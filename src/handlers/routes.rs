//! Route table
//!
//! Paths are parsed with the `url` crate against a fixed base so relative
//! inputs like `/events?sport=Tennis` resolve the same way a browser would.

use serde::Serialize;
use url::{form_urlencoded, Url};
use crate::filter::QueryParams;
use crate::utils::errors::{Result, SportsBuddyError};

const BASE_URL: &str = "http://sportsbuddy.local/";

/// Navigable locations of the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Home,
    Events { query: QueryParams },
    EventDetails { event_id: String },
    Buddies { query: QueryParams },
    Login,
    Signup,
    Profile,
    NotFound { path: String },
}

impl Route {
    /// Parse a path with optional query string
    ///
    /// Absolute and scheme-relative inputs that leave the application origin
    /// are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let base = Url::parse(BASE_URL)?;
        let url = base.join(input)?;
        if url.origin() != base.origin() {
            return Err(SportsBuddyError::InvalidInput(format!(
                "Path leaves the application: {}",
                input
            )));
        }
        let query: QueryParams = url.query_pairs().into_owned().collect();

        let segments: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| {
                        urlencoding::decode(segment)
                            .map(|decoded| decoded.into_owned())
                            .unwrap_or_else(|_| segment.to_string())
                    })
                    .collect()
            })
            .unwrap_or_default();

        let route = match segments.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            [] => Route::Home,
            ["events"] => Route::Events { query },
            ["events", event_id] => Route::EventDetails { event_id: event_id.to_string() },
            ["buddies"] => Route::Buddies { query },
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["profile"] => Route::Profile,
            _ => Route::NotFound { path: url.path().to_string() },
        };

        Ok(route)
    }

    /// Events listing pre-filtered by sport
    pub fn events_for_sport(sport: &str) -> Self {
        let mut query = QueryParams::new();
        query.insert("sport".to_string(), sport.to_string());
        Route::Events { query }
    }

    pub fn events() -> Self {
        Route::Events { query: QueryParams::new() }
    }

    pub fn event_details(event_id: &str) -> Self {
        Route::EventDetails { event_id: event_id.to_string() }
    }

    /// Render back to a path with query string
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Events { query } => with_query("/events", query),
            Route::EventDetails { event_id } => {
                format!("/events/{}", urlencoding::encode(event_id))
            }
            Route::Buddies { query } => with_query("/buddies", query),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Pages that only make sense with a signed-in user
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Profile)
    }

    /// Pages that only make sense without a signed-in user
    pub fn guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }
}

fn with_query(path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        return path.to_string();
    }

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter())
        .finish();
    format!("{}?{}", path, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/login").unwrap(), Route::Login);
        assert_eq!(Route::parse("/signup/").unwrap(), Route::Signup);
        assert_eq!(Route::parse("/profile").unwrap(), Route::Profile);
    }

    #[test]
    fn test_parse_events_query() {
        let route = Route::parse("/events?sport=Tennis&location=New%20York").unwrap();
        let Route::Events { query } = route else {
            panic!("expected events route");
        };
        assert_eq!(query.get("sport").map(String::as_str), Some("Tennis"));
        assert_eq!(query.get("location").map(String::as_str), Some("New York"));
    }

    #[test]
    fn test_parse_event_details() {
        assert_eq!(Route::parse("/events/3").unwrap(), Route::event_details("3"));
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/admin").unwrap(),
            Route::NotFound { path: "/admin".to_string() }
        );
        assert_eq!(
            Route::parse("/events/1/edit").unwrap(),
            Route::NotFound { path: "/events/1/edit".to_string() }
        );
    }

    #[test]
    fn test_foreign_origins_are_rejected() {
        for input in ["//evil.example/login", "https://evil.example/events", "http://sportsbuddy.local:8080/"] {
            assert!(
                matches!(Route::parse(input), Err(SportsBuddyError::InvalidInput(_))),
                "accepted {}",
                input
            );
        }
        assert_eq!(Route::parse("http://sportsbuddy.local/login").unwrap(), Route::Login);
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::events_for_sport("Rock Climbing");
        assert_eq!(route.path(), "/events?sport=Rock+Climbing");
        assert_eq!(Route::parse(&route.path()).unwrap(), route);
        assert_eq!(Route::event_details("7").path(), "/events/7");
    }
}
