// src/profile.rs
//! Personal info persistence: local copy first, mirrored to the backend

use anyhow::Result;
use tracing::{info, warn};

use crate::core::{keys, EmailBackend, LocalStore};
use crate::notifier::Notice;
use crate::types::PersonalInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Stored locally and accepted by the backend
    Synced,
    /// Stored locally; the backend mirror failed and was not rolled back
    LocalOnly { error: String },
}

impl SaveOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            SaveOutcome::Synced => Notice::success("Personal information saved!"),
            SaveOutcome::LocalOnly { error } => Notice::error(format!(
                "Saved locally, but syncing with the server failed: {}",
                error
            )),
        }
    }
}

pub struct ProfileStore<'a> {
    store: &'a LocalStore,
    backend: &'a dyn EmailBackend,
}

impl<'a> ProfileStore<'a> {
    pub fn new(store: &'a LocalStore, backend: &'a dyn EmailBackend) -> Self {
        Self { store, backend }
    }

    /// Local copy if present, else the backend's; any failure yields an empty profile
    pub async fn load(&self) -> PersonalInfo {
        match self.store.get::<PersonalInfo>(keys::PERSONAL_INFO).await {
            Ok(Some(info)) => return info,
            Ok(None) => info!("No local personal info, asking backend"),
            Err(e) => warn!("Failed to read local personal info: {:#}", e),
        }

        match self.backend.fetch_personal_info().await {
            Ok(info) => info,
            Err(e) => {
                warn!("Failed to fetch personal info from backend: {:#}", e);
                PersonalInfo::default()
            }
        }
    }

    /// Local write must succeed; the backend mirror is best effort
    pub async fn save(&self, info: &PersonalInfo) -> Result<SaveOutcome> {
        self.store.set(keys::PERSONAL_INFO, info).await?;
        info!("Personal info saved locally");

        match self.backend.update_personal_info(info).await {
            Ok(()) => Ok(SaveOutcome::Synced),
            Err(e) => {
                warn!("Personal info kept locally only: {:#}", e);
                Ok(SaveOutcome::LocalOnly {
                    error: format!("{:#}", e),
                })
            }
        }
    }
}
