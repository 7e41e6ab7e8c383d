//! Session store
//!
//! Holds at most one signed-in user for the process. Every successful auth
//! mutation overwrites the durable slot with the full user record; logout
//! clears it. State changes are published on a watch channel so a view can
//! observe the in-flight `Authenticating` phase.
//!
//! Credentials are NOT verified: login only checks that the email belongs to
//! a catalog user, and the password argument is ignored. Real deployments need
//! an actual credential check in front of this store.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};
use crate::database::UserRepository;
use crate::models::{ProfileUpdate, User};
use crate::utils::errors::{
    SportsBuddyError, Result, DUPLICATE_EMAIL, INVALID_CREDENTIALS, NOT_AUTHENTICATED,
};
use crate::utils::helpers::{generate_uuid, generated_avatar_url};
use crate::utils::logging::{log_session_action, log_session_failure};
use super::latency::Latency;
use super::storage::SessionStorage;

/// Coarse session phase derived from [`SessionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Anonymous,
    Authenticating,
    Authenticated,
    AuthError,
}

/// Snapshot of the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_loading {
            SessionStatus::Authenticating
        } else if self.is_authenticated {
            SessionStatus::Authenticated
        } else if self.error.is_some() {
            SessionStatus::AuthError
        } else {
            SessionStatus::Anonymous
        }
    }
}

pub struct SessionStore {
    state: watch::Sender<SessionState>,
    storage: Arc<dyn SessionStorage>,
    users: UserRepository,
    slot_key: String,
    latency: Latency,
    /// Serializes operations; a second call waits for the first to finish
    in_flight: Mutex<()>,
}

impl SessionStore {
    /// Create an anonymous session without reading storage
    pub fn new(
        storage: Arc<dyn SessionStorage>,
        users: UserRepository,
        slot_key: impl Into<String>,
        latency: Latency,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            state,
            storage,
            users,
            slot_key: slot_key.into(),
            latency,
            in_flight: Mutex::new(()),
        }
    }

    /// Create a session and restore any user saved in the durable slot
    ///
    /// A saved user is trusted as-is. An unreadable blob is discarded and the
    /// session starts anonymous.
    pub async fn restore(
        storage: Arc<dyn SessionStorage>,
        users: UserRepository,
        slot_key: impl Into<String>,
        latency: Latency,
    ) -> Result<Self> {
        let store = Self::new(storage, users, slot_key, latency);

        match store.storage.get(&store.slot_key).await? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, backend = store.storage.backend(), "Restored saved session");
                    store.state.send_replace(SessionState::authenticated(user));
                }
                Err(e) => {
                    warn!(error = %e, "Saved session is unreadable, clearing it");
                    store.storage.remove(&store.slot_key).await?;
                }
            },
            None => debug!("No saved session"),
        }

        Ok(store)
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Sign in as the catalog user owning `email`
    ///
    /// `_password` is accepted for interface parity and never checked.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User> {
        let _guard = self.in_flight.lock().await;
        self.begin();
        self.latency.settle().await;

        let outcome = match self.users.find_by_email(email).cloned() {
            Some(user) => self.persist(&user).await.map(|_| user),
            None => Err(SportsBuddyError::Authentication(INVALID_CREDENTIALS.to_string())),
        };

        self.finish("login", outcome)
    }

    /// Create a fresh account and sign in as it
    ///
    /// The new user lives only in the session; the catalog is read-only.
    pub async fn signup(&self, name: &str, email: &str, _password: &str) -> Result<User> {
        let _guard = self.in_flight.lock().await;
        self.begin();
        self.latency.settle().await;

        let outcome = if self.users.email_exists(email) {
            Err(SportsBuddyError::Validation(DUPLICATE_EMAIL.to_string()))
        } else {
            let user = User {
                id: generate_uuid(),
                name: name.to_string(),
                email: email.to_string(),
                avatar: generated_avatar_url(name),
                location: String::new(),
                bio: String::new(),
                skills: Vec::new(),
                events: Vec::new(),
                is_admin: None,
            };
            self.persist(&user).await.map(|_| user)
        };

        self.finish("signup", outcome)
    }

    /// Drop the current identity and clear the durable slot
    ///
    /// The in-memory state is reset even when clearing storage fails.
    pub async fn logout(&self) -> Result<()> {
        let _guard = self.in_flight.lock().await;
        let user_id = self.state.borrow().user.as_ref().map(|user| user.id.clone());

        self.state.send_replace(SessionState::default());
        self.storage.remove(&self.slot_key).await?;

        log_session_action(user_id.as_deref(), "logout", None);
        Ok(())
    }

    /// Merge `update` into the signed-in user and persist it
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        let _guard = self.in_flight.lock().await;
        self.begin();
        self.latency.settle().await;

        let current = self.state.borrow().user.clone();
        let outcome = match current {
            Some(mut user) => {
                user.apply_update(update);
                self.persist(&user).await.map(|_| user)
            }
            None => Err(SportsBuddyError::State(NOT_AUTHENTICATED.to_string())),
        };

        self.finish("update_profile", outcome)
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    fn finish(&self, action: &str, outcome: Result<User>) -> Result<User> {
        match outcome {
            Ok(user) => {
                self.state.send_replace(SessionState::authenticated(user.clone()));
                log_session_action(Some(&user.id), action, None);
                Ok(user)
            }
            Err(e) => {
                let message = e.user_message();
                log_session_failure(action, &e);
                self.state.send_modify(|state| {
                    state.is_loading = false;
                    state.error = Some(message);
                });
                Err(e)
            }
        }
    }

    async fn persist(&self, user: &User) -> Result<()> {
        let blob = serde_json::to_string(user)?;
        self.storage.set(&self.slot_key, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::database::Catalog;
    use crate::state::storage::MemoryStorage;

    const SLOT: &str = "sportsBuddyUser";

    fn store(storage: Arc<MemoryStorage>) -> SessionStore {
        let users = UserRepository::new(Catalog::embedded().unwrap().users);
        SessionStore::new(storage, users, SLOT, Latency::Immediate)
    }

    #[test]
    fn test_status_derivation() {
        let mut state = SessionState::default();
        assert_eq!(state.status(), SessionStatus::Anonymous);

        state.error = Some("boom".to_string());
        assert_eq!(state.status(), SessionStatus::AuthError);

        state.is_loading = true;
        assert_eq!(state.status(), SessionStatus::Authenticating);
    }

    #[tokio::test]
    async fn test_login_persists_user_blob() {
        let storage = Arc::new(MemoryStorage::new());
        let session = store(storage.clone());

        let user = session.login("alex@example.com", "anything").await.unwrap();
        assert_eq!(session.status(), SessionStatus::Authenticated);

        let raw = storage.get(SLOT).await.unwrap().unwrap();
        let saved: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved, user);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_identity() {
        let session = store(Arc::new(MemoryStorage::new()));
        session.login("alex@example.com", "pw").await.unwrap();

        let err = session.login("nobody@example.com", "pw").await.unwrap_err();
        assert_matches!(err, SportsBuddyError::Authentication(_));
        assert!(session.is_authenticated());
        assert_eq!(session.error().as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_update_profile_requires_user() {
        let session = store(Arc::new(MemoryStorage::new()));
        let err = session.update_profile(ProfileUpdate::default()).await.unwrap_err();
        assert_matches!(err, SportsBuddyError::State(_));
        assert_eq!(session.status(), SessionStatus::AuthError);
        assert_eq!(session.error().as_deref(), Some(NOT_AUTHENTICATED));
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_blob() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SLOT, "{not json").await.unwrap();

        let users = UserRepository::new(Vec::new());
        let session = SessionStore::restore(storage.clone(), users, SLOT, Latency::Immediate)
            .await
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Anonymous);
        assert_eq!(storage.get(SLOT).await.unwrap(), None);
    }
}
