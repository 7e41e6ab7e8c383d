//! Session slot storage
//!
//! This module handles persistence of the signed-in user blob. A slot is a
//! named key holding one serialized value; writes replace the whole value.
//! Backends: process memory, one JSON file per key, or Redis.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use crate::config::{StorageBackend, StorageConfig};
use crate::utils::errors::{SportsBuddyError, Result};

/// Durable key-value slots outside process memory
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;

    /// Backend name for logs
    fn backend(&self) -> &'static str;
}

/// Build the storage backend selected in configuration
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn SessionStorage>> {
    let storage: Arc<dyn SessionStorage> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::File => Arc::new(FileStorage::new(&config.file_dir)),
        StorageBackend::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                SportsBuddyError::Config("Redis URL is required for the redis storage backend".to_string())
            })?;
            Arc::new(RedisStorage::new(url, &config.redis_prefix).await?)
        }
    };

    info!(backend = storage.backend(), "Session storage ready");
    Ok(storage)
}

/// Slots held in process memory; lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.slots.write().await.remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// One `<key>.json` file per slot under a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

#[async_trait]
impl SessionStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                debug!(path = %path.display(), data_length = data.len(), "Slot read from file");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read slot file");
                Err(e.into())
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write beside the target then rename so readers never see a torn blob
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!(path = %path.display(), data_length = value.len(), "Slot written to file");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Slot file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

/// Slots stored as plain Redis strings under a key prefix
#[derive(Clone)]
pub struct RedisStorage {
    connection_manager: redis::aio::ConnectionManager,
    prefix: String,
}

impl RedisStorage {
    pub async fn new(url: &str, prefix: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            prefix: prefix.to_string(),
        })
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl SessionStorage for RedisStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let full_key = self.full_key(key);
        let mut conn = self.connection_manager.clone();

        let value: Option<String> = conn.get(&full_key).await?;
        debug!(key = %full_key, has_data = value.is_some(), "Redis GET result");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let full_key = self.full_key(key);
        let mut conn = self.connection_manager.clone();

        conn.set::<_, _, ()>(&full_key, value).await?;
        debug!(key = %full_key, data_length = value.len(), "Slot saved to Redis");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let full_key = self.full_key(key);
        let mut conn = self.connection_manager.clone();

        let deleted: u32 = conn.del(&full_key).await?;
        debug!(key = %full_key, deleted = deleted > 0, "Slot deletion attempted");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
