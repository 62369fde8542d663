// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optimistic settings controller
//!
//! Toggles apply locally first, then persist remotely. A failed write puts the
//! toggled field back to the value this call saw and mirrors the result into
//! the local cache so the next load starts from it.

use noc_adapters::{SettingsCache, SettingsStore, StoreError};
use noc_core::{GlobalSettings, SettingKey, SettingsPatch};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Cache key holding the JSON snapshot of [`GlobalSettings`]
pub const SETTINGS_CACHE_KEY: &str = "noc.globalSettings";

/// Where the loaded settings came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSource {
    Remote,
    Cache,
    Defaults,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSource::Remote => write!(f, "remote"),
            SettingsSource::Cache => write!(f, "cache"),
            SettingsSource::Defaults => write!(f, "defaults"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loaded {
    pub settings: GlobalSettings,
    pub source: SettingsSource,
}

/// Result of a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Remote write accepted
    Applied { settings: GlobalSettings },
    /// Remote write rejected; the field was restored
    Reverted {
        reverted_to: GlobalSettings,
        reason: StoreError,
    },
}

impl ToggleOutcome {
    /// Settings as they stood when the toggle resolved
    pub fn settings(&self) -> GlobalSettings {
        match self {
            ToggleOutcome::Applied { settings } => *settings,
            ToggleOutcome::Reverted { reverted_to, .. } => *reverted_to,
        }
    }
}

/// Owns the console-wide settings for a session
pub struct SettingsController<S, C> {
    store: S,
    cache: C,
    current: Mutex<GlobalSettings>,
    pending: AtomicUsize,
}

impl<S: SettingsStore, C: SettingsCache> SettingsController<S, C> {
    pub fn new(store: S, cache: C) -> Self {
        Self {
            store,
            cache,
            current: Mutex::new(GlobalSettings::default()),
            pending: AtomicUsize::new(0),
        }
    }

    /// Hydrate from the remote store, then the cache, then defaults
    ///
    /// Never fails.
    pub async fn load(&self) -> Loaded {
        let loaded = match self.store.get().await {
            Ok(raw) => Loaded {
                settings: GlobalSettings::from_raw(&raw),
                source: SettingsSource::Remote,
            },
            Err(e) => {
                tracing::warn!(error = %e, "remote settings unavailable, trying cache");
                match self.cached().await {
                    Some(settings) => Loaded {
                        settings,
                        source: SettingsSource::Cache,
                    },
                    None => Loaded {
                        settings: GlobalSettings::default(),
                        source: SettingsSource::Defaults,
                    },
                }
            }
        };

        *self.lock() = loaded.settings;
        tracing::info!(source = %loaded.source, "settings loaded");
        loaded
    }

    async fn cached(&self) -> Option<GlobalSettings> {
        let json = match self.cache.get(SETTINGS_CACHE_KEY).await {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "settings cache unreadable");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed cached settings");
                None
            }
        }
    }

    /// Flip one setting, persist it, and restore it if the write fails
    pub async fn toggle(&self, key: SettingKey) -> ToggleOutcome {
        let previous = {
            let mut current = self.lock();
            let previous = current.get(key);
            current.set(key, !previous);
            previous
        };

        self.pending.fetch_add(1, Ordering::SeqCst);
        let result = self
            .store
            .put(&SettingsPatch::single(key, !previous))
            .await;
        self.pending.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(()) => {
                let settings = self.settings();
                tracing::info!(setting = %key, value = !previous, "setting applied");
                ToggleOutcome::Applied { settings }
            }
            Err(reason) => {
                // Only this call's field, only back to what this call saw
                let reverted_to = {
                    let mut current = self.lock();
                    current.set(key, previous);
                    *current
                };
                tracing::warn!(setting = %key, error = %reason, "setting reverted");
                self.remember(&reverted_to).await;
                ToggleOutcome::Reverted {
                    reverted_to,
                    reason,
                }
            }
        }
    }

    async fn remember(&self, settings: &GlobalSettings) {
        let json = match serde_json::to_string(settings) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode settings for cache");
                return;
            }
        };
        if let Err(e) = self.cache.set(SETTINGS_CACHE_KEY, &json).await {
            tracing::warn!(error = %e, "failed to cache reverted settings");
        }
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> GlobalSettings {
        *self.lock()
    }

    /// Whether any remote write is in flight
    pub fn is_pending(&self) -> bool {
        self.pending_writes() > 0
    }

    pub fn pending_writes(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, GlobalSettings> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
