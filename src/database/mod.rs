//! Record store module
//!
//! This module holds the read-only catalog of users, events and sports and
//! the repositories that query it

pub mod catalog;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use catalog::{Catalog, load_catalog, check_integrity};
pub use repositories::{UserRepository, EventRepository, SportRepository};
pub use service::DatabaseService;
