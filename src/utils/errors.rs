//! Error handling for SportsBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Message recorded on the session when login finds no matching account
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Message recorded on the session when signup hits an existing email
pub const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// Message recorded on the session when an operation needs a signed-in user
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Main error type for SportsBuddy application
#[derive(Error, Debug)]
pub enum SportsBuddyError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Session state error: {0}")]
    State(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Event is full: {event_id}")]
    EventFull { event_id: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog integrity violation: {0}")]
    Integrity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Result type alias for SportsBuddy operations
pub type Result<T> = std::result::Result<T, SportsBuddyError>;

impl SportsBuddyError {
    /// Human-readable message shown next to a form or stored on the session
    pub fn user_message(&self) -> String {
        match self {
            SportsBuddyError::Validation(msg)
            | SportsBuddyError::Authentication(msg)
            | SportsBuddyError::State(msg)
            | SportsBuddyError::InvalidInput(msg)
            | SportsBuddyError::PermissionDenied(msg) => msg.clone(),
            SportsBuddyError::EventFull { .. } => "This event is already full".to_string(),
            _ => "An error occurred".to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SportsBuddyError::Validation(_) => true,
            SportsBuddyError::Authentication(_) => true,
            SportsBuddyError::State(_) => true,
            SportsBuddyError::EventNotFound { .. } => false,
            SportsBuddyError::EventFull { .. } => true,
            SportsBuddyError::PermissionDenied(_) => false,
            SportsBuddyError::InvalidInput(_) => true,
            SportsBuddyError::Integrity(_) => false,
            SportsBuddyError::Config(_) => false,
            SportsBuddyError::ConfigLoad(_) => false,
            SportsBuddyError::Redis(_) => true,
            SportsBuddyError::Serialization(_) => false,
            SportsBuddyError::Io(_) => true,
            SportsBuddyError::UrlParse(_) => false,
            SportsBuddyError::Logging(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SportsBuddyError::Integrity(_) => ErrorSeverity::Critical,
            SportsBuddyError::Config(_) => ErrorSeverity::Critical,
            SportsBuddyError::ConfigLoad(_) => ErrorSeverity::Critical,
            SportsBuddyError::Logging(_) => ErrorSeverity::Critical,
            SportsBuddyError::PermissionDenied(_) => ErrorSeverity::Warning,
            SportsBuddyError::Authentication(_) => ErrorSeverity::Warning,
            SportsBuddyError::State(_) => ErrorSeverity::Warning,
            SportsBuddyError::Validation(_) => ErrorSeverity::Info,
            SportsBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            SportsBuddyError::EventFull { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
