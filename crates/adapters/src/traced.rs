// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::cache::{CacheError, SettingsCache};
use crate::store::{SettingsStore, StoreError};
use async_trait::async_trait;
use noc_core::{RawSettings, SettingsPatch};
use tracing::Instrument;

/// Wrapper that adds tracing to any SettingsStore
#[derive(Clone)]
pub struct TracedSettingsStore<S> {
    inner: S,
}

impl<S> TracedSettingsStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: SettingsStore> SettingsStore for TracedSettingsStore<S> {
    async fn get(&self) -> Result<RawSettings, StoreError> {
        let span = tracing::info_span!("store.get");
        async {
            let start = std::time::Instant::now();
            let result = self.inner.get().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(raw) => tracing::info!(elapsed_ms, ?raw, "fetched settings"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "fetch failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn put(&self, patch: &SettingsPatch) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.put", ?patch);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.put(patch).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "settings updated"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "update failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any SettingsCache
#[derive(Clone)]
pub struct TracedSettingsCache<C> {
    inner: C,
}

impl<C> TracedSettingsCache<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: SettingsCache> SettingsCache for TracedSettingsCache<C> {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let span = tracing::info_span!("cache.get", key);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.get(key).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(value) => tracing::debug!(elapsed_ms, hit = value.is_some(), "cache read"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "cache read failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let span = tracing::info_span!("cache.set", key);
        async {
            let start = std::time::Instant::now();
            let result = self.inner.set(key, value).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::debug!(elapsed_ms, len = value.len(), "cache written"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "cache write failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
