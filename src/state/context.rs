//! Application context
//!
//! Bundles the catalog, the session store and the services so pages receive
//! their collaborators explicitly.

use std::sync::Arc;
use tracing::info;
use crate::config::Settings;
use crate::database::{Catalog, DatabaseService};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use super::latency::Latency;
use super::session::SessionStore;
use super::storage::{create_storage, SessionStorage};

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub database: Arc<DatabaseService>,
    pub session: Arc<SessionStore>,
    pub services: Arc<ServiceFactory>,
}

impl AppContext {
    /// Load the catalog, open storage and restore the saved session
    pub async fn bootstrap(settings: Settings) -> Result<Self> {
        let database = DatabaseService::load(&settings.catalog).await?;
        let storage = create_storage(&settings.storage).await?;
        Self::assemble(settings, database, storage).await
    }

    /// Build a context around an already loaded catalog and storage backend
    pub async fn with_parts(
        settings: Settings,
        catalog: Catalog,
        storage: Arc<dyn SessionStorage>,
    ) -> Result<Self> {
        Self::assemble(settings, DatabaseService::new(catalog), storage).await
    }

    async fn assemble(
        settings: Settings,
        database: DatabaseService,
        storage: Arc<dyn SessionStorage>,
    ) -> Result<Self> {
        let session = SessionStore::restore(
            storage,
            database.users.clone(),
            settings.storage.slot_key.clone(),
            Latency::from_millis(settings.session.latency_ms),
        )
        .await?;
        let services = ServiceFactory::new(&settings);

        info!(
            users = database.users.count(),
            events = database.events.count(),
            session = ?session.status(),
            "Application context ready"
        );

        Ok(Self {
            settings,
            database: Arc::new(database),
            session: Arc::new(session),
            services: Arc::new(services),
        })
    }
}

#[cfg(test)]
impl AppContext {
    /// Embedded catalog, in-memory slot storage and no artificial latency
    pub(crate) async fn for_tests() -> Self {
        use crate::config::StorageBackend;
        use super::storage::MemoryStorage;

        let mut settings = Settings::default();
        settings.storage.backend = StorageBackend::Memory;
        settings.session.latency_ms = 0;

        let catalog = Catalog::embedded().expect("embedded catalog parses");
        Self::with_parts(settings, catalog, Arc::new(MemoryStorage::new()))
            .await
            .expect("test context builds")
    }
}
