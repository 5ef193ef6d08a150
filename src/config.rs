// src/config.rs
//! Runtime configuration: optional `jobmail.yaml`, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "jobmail.yaml";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_COMPOSE_URL: &str = "https://outlook.office.com/mail/deeplink/compose";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `local` or `production`; picks the `jobmail.yaml` section
    pub environment: String,
    pub backend_url: String,
    pub storage_path: PathBuf,
    pub log_path: PathBuf,
    pub timeout_seconds: u64,
    pub compose_url: String,
}

/// One environment section of `jobmail.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileSection {
    backend_url: Option<String>,
    storage_path: Option<PathBuf>,
    log_path: Option<PathBuf>,
    timeout_seconds: Option<u64>,
    compose_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration for the current environment from the working directory
    pub fn load() -> Result<AppConfig> {
        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&base_dir, |key| std::env::var(key).ok())
    }

    /// Load configuration rooted at `base_dir`, reading variables through `env`
    pub fn load_from<F>(base_dir: &Path, env: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = env("JOBMAIL_ENV")
            .or_else(|| env("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());

        let section = Self::read_file_section(base_dir, &environment)?;

        let backend_url = env("JOBMAIL_BACKEND_URL")
            .or(section.backend_url)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let storage_path = env("JOBMAIL_STORAGE_PATH")
            .map(PathBuf::from)
            .or(section.storage_path)
            .unwrap_or_else(|| PathBuf::from("data").join("storage.json"));

        let log_path = env("JOBMAIL_LOG_PATH")
            .map(PathBuf::from)
            .or(section.log_path)
            .unwrap_or_else(|| PathBuf::from("/tmp/jobmail.log"));

        let timeout_seconds = match env("JOBMAIL_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("JOBMAIL_TIMEOUT_SECS must be a number of seconds"))?,
            None => section.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let compose_url = env("JOBMAIL_COMPOSE_URL")
            .or(section.compose_url)
            .unwrap_or_else(|| DEFAULT_COMPOSE_URL.to_string());

        Ok(AppConfig {
            environment,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            storage_path: resolve_path(base_dir, &storage_path),
            log_path: resolve_path(base_dir, &log_path),
            timeout_seconds,
            compose_url,
        })
    }

    fn read_file_section(base_dir: &Path, environment: &str) -> Result<FileSection> {
        let config_path = base_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(FileSection::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
