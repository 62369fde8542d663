// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote settings store adapters

mod http;

pub use http::HttpSettingsStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSettingsStore, StoreCall};

use async_trait::async_trait;
use noc_core::{RawSettings, SettingsPatch};
use thiserror::Error;

/// Errors from remote store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Adapter for the backend's settings resource
#[async_trait]
pub trait SettingsStore: Clone + Send + Sync + 'static {
    /// Fetch the full settings resource
    async fn get(&self) -> Result<RawSettings, StoreError>;

    /// Apply a partial update
    async fn put(&self, patch: &SettingsPatch) -> Result<(), StoreError>;
}
