// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local settings cache adapters

mod file;

pub use file::FileSettingsCache;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSettingsCache;

use async_trait::async_trait;
use noc_storage::KvError;
use thiserror::Error;

/// Errors from cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Storage(#[from] KvError),
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// String key/value cache that survives restarts
#[async_trait]
pub trait SettingsCache: Clone + Send + Sync + 'static {
    /// Read a value; `None` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}
