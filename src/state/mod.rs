//! State management module
//!
//! This module handles the session store, its durable slot and the
//! application-wide context

pub mod context;
pub mod latency;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use context::AppContext;
pub use latency::Latency;
pub use session::{SessionState, SessionStatus, SessionStore};
pub use storage::{create_storage, FileStorage, MemoryStorage, RedisStorage, SessionStorage};
