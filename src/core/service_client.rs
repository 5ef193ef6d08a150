// src/core/service_client.rs
//! HTTP client for the email generation backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::MailerError;
use crate::types::{GenerateEmailRequest, GenerateEmailResponse, HealthStatus, PersonalInfo};

const GENERATE_EMAIL_ENDPOINT: &str = "/generate-email";
const PERSONAL_INFO_ENDPOINT: &str = "/personal-info";
const UPDATE_PERSONAL_INFO_ENDPOINT: &str = "/update-personal-info";
const HEALTH_ENDPOINT: &str = "/health";

/// The remote side of the panel and the profile bridge
#[async_trait]
pub trait EmailBackend: Send + Sync {
    async fn generate_email(&self, request: &GenerateEmailRequest)
        -> Result<GenerateEmailResponse>;

    async fn fetch_personal_info(&self) -> Result<PersonalInfo>;

    async fn update_personal_info(&self, info: &PersonalInfo) -> Result<()>;
}

pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get(HEALTH_ENDPOINT).await
    }

    /// POST JSON and decode a JSON reply; non-2xx becomes `MailerError::Backend`
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::decode(response).await
    }

    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = backend_error_message(&error_text);
            error!("Backend error {}: {}", status, message);
            Err(MailerError::Backend {
                status: status.as_u16(),
                message,
            }
            .into())
        }
    }
}

/// The backend reports failures as `{"error": "..."}`; fall back to the raw text
fn backend_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl EmailBackend for ServiceClient {
    async fn generate_email(
        &self,
        request: &GenerateEmailRequest,
    ) -> Result<GenerateEmailResponse> {
        info!(
            "Requesting draft (job posting: {} chars, profile attached: {})",
            request.job_posting.chars().count(),
            request.personal_info.is_some()
        );
        self.post_json(GENERATE_EMAIL_ENDPOINT, request).await
    }

    async fn fetch_personal_info(&self) -> Result<PersonalInfo> {
        self.get(PERSONAL_INFO_ENDPOINT).await
    }

    async fn update_personal_info(&self, info: &PersonalInfo) -> Result<()> {
        let _: serde_json::Value = self
            .post_json(UPDATE_PERSONAL_INFO_ENDPOINT, info)
            .await
            .context("Failed to update personal info on backend")?;
        info!("Personal info mirrored to backend");
        Ok(())
    }
}
