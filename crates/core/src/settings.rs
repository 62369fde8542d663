// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global console settings and their remote wire shapes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown setting: {0:?} (expected maintenanceMode, autoResolve or aiCorrelation)")]
pub struct ParseSettingKeyError(pub String);

/// Console-wide switches
///
/// Serialized with camelCase keys; this is the shape kept in the local cache.
/// Missing keys take their default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub maintenance_mode: bool,
    pub auto_resolve: bool,
    pub ai_correlation: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            auto_resolve: true,
            ai_correlation: true,
        }
    }
}

impl GlobalSettings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::MaintenanceMode => self.maintenance_mode,
            SettingKey::AutoResolve => self.auto_resolve,
            SettingKey::AiCorrelation => self.ai_correlation,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::MaintenanceMode => self.maintenance_mode = value,
            SettingKey::AutoResolve => self.auto_resolve = value,
            SettingKey::AiCorrelation => self.ai_correlation = value,
        }
    }

    /// Copy with one field flipped
    pub fn toggled(&self, key: SettingKey) -> Self {
        let mut next = *self;
        next.set(key, !self.get(key));
        next
    }

    /// Build from the remote shape, filling absent fields from defaults
    pub fn from_raw(raw: &RawSettings) -> Self {
        let defaults = Self::default();
        Self {
            maintenance_mode: raw.maintenance_mode.unwrap_or(defaults.maintenance_mode),
            auto_resolve: raw.auto_resolve_enabled.unwrap_or(defaults.auto_resolve),
            ai_correlation: raw
                .ai_correlation_enabled
                .unwrap_or(defaults.ai_correlation),
        }
    }
}

impl fmt::Display for GlobalSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in SettingKey::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let state = if self.get(key) { "on" } else { "off" };
            write!(f, "{:<16} {}", key.name(), state)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    MaintenanceMode,
    AutoResolve,
    AiCorrelation,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::MaintenanceMode,
        SettingKey::AutoResolve,
        SettingKey::AiCorrelation,
    ];

    /// Name used by the console and the local cache
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::MaintenanceMode => "maintenanceMode",
            SettingKey::AutoResolve => "autoResolve",
            SettingKey::AiCorrelation => "aiCorrelation",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts camelCase, snake_case, kebab-case and the remote field names
impl FromStr for SettingKey {
    type Err = ParseSettingKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let folded = folded.strip_suffix("enabled").unwrap_or(&folded);
        SettingKey::ALL
            .into_iter()
            .find(|key| key.name().to_ascii_lowercase() == folded)
            .ok_or_else(|| ParseSettingKeyError(s.to_string()))
    }
}

/// Settings resource as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_resolve_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_correlation_enabled: Option<bool>,
}

/// Partial update sent to the backend; carries only the changed field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch(pub RawSettings);

impl SettingsPatch {
    pub fn single(key: SettingKey, value: bool) -> Self {
        let mut raw = RawSettings::default();
        match key {
            SettingKey::MaintenanceMode => raw.maintenance_mode = Some(value),
            SettingKey::AutoResolve => raw.auto_resolve_enabled = Some(value),
            SettingKey::AiCorrelation => raw.ai_correlation_enabled = Some(value),
        }
        Self(raw)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
