//! Authorization service implementation
//!
//! This service decides which actions the current session may take on the
//! event pages. The only inputs are whether someone is signed in, their admin
//! flag, and their relation to an event (host or participant).

use std::collections::HashSet;
use serde::Serialize;
use tracing::debug;
use crate::models::{Event, User};
use crate::utils::errors::{SportsBuddyError, Result, NOT_AUTHENTICATED};

/// Actions gated on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Permission {
    /// Browse public pages
    Browse,
    /// View own profile
    ViewProfile,
    CreateEvent,
    JoinEvent,
    LeaveEvent,
    /// Edit or delete an event
    ManageEvent,
    /// Admin area
    AccessAdmin,
}

/// Permissions resolved for one user, optionally against one event
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Option<String>,
    pub permissions: HashSet<Permission>,
    pub is_admin: bool,
    pub is_host: bool,
    pub is_participant: bool,
}

impl AuthContext {
    pub fn allows(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve what `user` may do, in general or on `event`
    pub fn auth_context(&self, user: Option<&User>, event: Option<&Event>) -> AuthContext {
        let mut permissions = HashSet::new();
        permissions.insert(Permission::Browse);

        let Some(user) = user else {
            return AuthContext {
                user_id: None,
                permissions,
                is_admin: false,
                is_host: false,
                is_participant: false,
            };
        };

        permissions.insert(Permission::ViewProfile);
        permissions.insert(Permission::CreateEvent);

        let is_admin = user.is_admin();
        if is_admin {
            permissions.insert(Permission::AccessAdmin);
        }

        let is_host = event.map_or(false, |e| e.is_hosted_by(&user.id));
        let is_participant = event.map_or(false, |e| e.is_participant(&user.id));

        if let Some(event) = event {
            if is_participant {
                permissions.insert(Permission::LeaveEvent);
            } else if !event.is_full() {
                permissions.insert(Permission::JoinEvent);
            }

            if is_host || is_admin {
                permissions.insert(Permission::ManageEvent);
            }
        }

        debug!(user_id = %user.id, permissions = ?permissions, "Authorization context created");
        AuthContext {
            user_id: Some(user.id.clone()),
            permissions,
            is_admin,
            is_host,
            is_participant,
        }
    }

    /// Require a permission or return an error
    pub fn require(&self, user: Option<&User>, event: Option<&Event>, permission: Permission) -> Result<AuthContext> {
        let context = self.auth_context(user, event);

        if context.allows(permission) {
            return Ok(context);
        }

        if context.user_id.is_none() {
            return Err(SportsBuddyError::State(NOT_AUTHENTICATED.to_string()));
        }

        Err(SportsBuddyError::PermissionDenied(format!(
            "User {} lacks required permission: {:?}",
            context.user_id.as_deref().unwrap_or_default(),
            permission
        )))
    }
}
