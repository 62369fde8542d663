// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake settings store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SettingsStore, StoreError};
use async_trait::async_trait;
use noc_core::{RawSettings, SettingsPatch};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Get,
    Put(SettingsPatch),
}

/// Fake settings store for testing
///
/// Puts succeed unless a failure is scripted with [`FakeSettingsStore::script_put`].
/// Successful puts merge into the fake's remote state.
#[derive(Clone, Default)]
pub struct FakeSettingsStore {
    remote: Arc<Mutex<RawSettings>>,
    get_error: Arc<Mutex<Option<StoreError>>>,
    put_results: Arc<Mutex<VecDeque<Result<(), StoreError>>>>,
    put_gate: Option<Arc<Semaphore>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl FakeSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote(self, raw: RawSettings) -> Self {
        *self.remote.lock().unwrap_or_else(|e| e.into_inner()) = raw;
        self
    }

    /// Make every put wait for a permit on `gate` before resolving
    pub fn with_put_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.put_gate = Some(gate);
        self
    }

    /// Make all subsequent gets fail
    pub fn fail_get(&self, err: StoreError) {
        *self.get_error.lock().unwrap_or_else(|e| e.into_inner()) = Some(err);
    }

    /// Queue the outcome of the next unscripted put
    pub fn script_put(&self, result: Result<(), StoreError>) {
        self.put_results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(result);
    }

    /// Current remote state
    pub fn remote(&self) -> RawSettings {
        self.remote.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SettingsStore for FakeSettingsStore {
    async fn get(&self) -> Result<RawSettings, StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(StoreCall::Get);

        if let Some(err) = self
            .get_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(err);
        }
        Ok(self.remote())
    }

    async fn put(&self, patch: &SettingsPatch) -> Result<(), StoreError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(StoreCall::Put(patch.clone()));

        // Outcome is bound at entry so concurrent puts resolve in call order
        let result = self
            .put_results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(Ok(()));

        if let Some(gate) = &self.put_gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        if result.is_ok() {
            let mut remote = self.remote.lock().unwrap_or_else(|e| e.into_inner());
            let SettingsPatch(fields) = patch;
            if fields.maintenance_mode.is_some() {
                remote.maintenance_mode = fields.maintenance_mode;
            }
            if fields.auto_resolve_enabled.is_some() {
                remote.auto_resolve_enabled = fields.auto_resolve_enabled;
            }
            if fields.ai_correlation_enabled.is_some() {
                remote.ai_correlation_enabled = fields.ai_correlation_enabled;
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
