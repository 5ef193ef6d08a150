// src/core/storage.rs
//! JSON key-value store standing in for extension-scoped local storage

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::FsOps;

/// Named keys under which values are persisted
pub mod keys {
    /// Job posting text as last typed into the panel
    pub const SAVED_JOB_POSTING: &str = "savedJobPosting";
    /// Text taken off a page plus its extraction timestamp
    pub const EXTRACTED_JOB_POSTING: &str = "extractedJobPosting";
    pub const PERSONAL_INFO: &str = "personalInfo";
}

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let map = self.read_all().await?;
        match map.get(key) {
            Some(value) => {
                let parsed = serde_json::from_value(value.clone())
                    .with_context(|| format!("Stored value for '{}' has an unexpected shape", key))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut map = self.read_all().await?;
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to serialize value for '{}'", key))?;
        map.insert(key.to_string(), value);
        self.write_all(&map).await?;
        debug!("Stored key '{}' in {}", key, self.path.display());
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<bool> {
        let mut map = self.read_all().await?;
        let removed = map.remove(key).is_some();
        if removed {
            self.write_all(&map).await?;
        }
        Ok(removed)
    }

    async fn read_all(&self) -> Result<Map<String, Value>> {
        let Some(content) = FsOps::read_file_if_exists(&self.path).await? else {
            return Ok(Map::new());
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                // An unreadable store must not block the user; keep it for inspection.
                warn!("Storage file {} is corrupt: {}", self.path.display(), e);
                FsOps::backup_file(&self.path).await?;
                Ok(Map::new())
            }
        }
    }

    async fn write_all(&self, map: &Map<String, Value>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(map).context("Failed to serialize storage contents")?;
        FsOps::write_file_safe(&self.path, &content).await
    }
}
