// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backend records holding encoded configuration strings
//!
//! The console never owns these; they're fetched, edited through the codec,
//! and sent back.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Alert threshold rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Encoded condition, e.g. `CPU > 90%`
    pub condition: String,
    /// How long the condition must hold, e.g. `5 minutes`
    pub duration: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

/// Recurring maintenance window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub id: String,
    pub name: String,
    /// Encoded schedule, e.g. `Every Sunday 02:00 UTC`
    pub schedule: String,
    /// Window length, e.g. `2 hours`
    pub duration: String,
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
