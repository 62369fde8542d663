// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings store backed by the console REST API

use super::{SettingsStore, StoreError};
use async_trait::async_trait;
use noc_core::{RawSettings, SettingsPatch};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `GET`/`PUT {api_url}/settings` over blocking HTTP on the tokio blocking pool
#[derive(Clone)]
pub struct HttpSettingsStore {
    url: String,
    agent: ureq::Agent,
}

impl HttpSettingsStore {
    pub fn new(api_url: &str) -> Self {
        Self::with_timeout(api_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_url: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            url: format!("{}/settings", api_url.trim_end_matches('/')),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl From<ureq::Error> for StoreError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => StoreError::Status(code),
            other => StoreError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl SettingsStore for HttpSettingsStore {
    async fn get(&self) -> Result<RawSettings, StoreError> {
        let agent = self.agent.clone();
        let url = self.url.clone();

        tokio::task::spawn_blocking(move || -> Result<RawSettings, StoreError> {
            let mut response = agent.get(&url).call()?;
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| StoreError::Transport(format!("failed to read response: {}", e)))?;
            serde_json::from_str::<RawSettings>(&body).map_err(|e| StoreError::Decode(e.to_string()))
        })
        .await
        .map_err(|e| StoreError::Transport(format!("request task failed: {}", e)))?
    }

    async fn put(&self, patch: &SettingsPatch) -> Result<(), StoreError> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        let body = serde_json::to_string(patch).map_err(|e| StoreError::Decode(e.to_string()))?;

        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            agent
                .put(&url)
                .header("Content-Type", "application/json")
                .send(body.as_str())?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Transport(format!("request task failed: {}", e)))?
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
