//! SportsBuddy
//!
//! Core of a sports-partner finder: a read-only catalog of people and events,
//! filters over both, a persisted session for the signed-in person, and page
//! models for every screen of the application.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{SportsBuddyError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use filter::{EventFilter, RecordFilter, UserFilter};
pub use handlers::{handle_request, Page, Route};
pub use services::ServiceFactory;
pub use state::{AppContext, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
