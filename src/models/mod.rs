//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod event;
pub mod sport;

// Re-export commonly used models
pub use user::{User, Skill, SkillLevel, ProfileUpdate};
pub use event::Event;
pub use sport::SportCategory;
