//! Test context for unified test setup

use std::sync::{Arc, Once};
use tempfile::TempDir;

use SportsBuddy::config::{Settings, StorageBackend};
use SportsBuddy::database::Catalog;
use SportsBuddy::state::{AppContext, FileStorage, MemoryStorage, SessionStorage};

static INIT: Once = Once::new();

/// Install a test subscriber once per binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("SportsBuddy=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Test configuration options
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub backend: StorageBackend,
    pub latency_ms: u64,
    pub case_insensitive_location: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            latency_ms: 0,
            case_insensitive_location: false,
        }
    }
}

/// Application context plus the resources backing it
pub struct TestContext {
    pub app: AppContext,
    pub storage: Arc<dyn SessionStorage>,
    pub settings: Settings,
    pub temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    pub async fn new_with_config(config: TestConfig) -> Self {
        init_test_logging();

        let temp_dir = tempfile::tempdir().expect("temp dir");
        let settings = test_settings(&config, &temp_dir);
        let storage: Arc<dyn SessionStorage> = match config.backend {
            StorageBackend::File => Arc::new(FileStorage::new(temp_dir.path())),
            _ => Arc::new(MemoryStorage::new()),
        };

        let app = build_app(&settings, storage.clone()).await;
        Self { app, storage, settings, temp_dir }
    }

    /// A second application instance sharing this context's storage,
    /// standing in for a page reload
    pub async fn reload(&self) -> AppContext {
        build_app(&self.settings, self.storage.clone()).await
    }
}

async fn build_app(settings: &Settings, storage: Arc<dyn SessionStorage>) -> AppContext {
    let catalog = Catalog::embedded().expect("embedded catalog");
    AppContext::with_parts(settings.clone(), catalog, storage)
        .await
        .expect("app context")
}

/// Settings pointing every path into `temp_dir`
pub fn test_settings(config: &TestConfig, temp_dir: &TempDir) -> Settings {
    let mut settings = Settings::default();
    settings.storage.backend = config.backend;
    settings.storage.file_dir = temp_dir.path().to_string_lossy().into_owned();
    settings.session.latency_ms = config.latency_ms;
    settings.filter.case_insensitive_location = config.case_insensitive_location;
    settings.logging.level = "debug".to_string();
    settings
}
