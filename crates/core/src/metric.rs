// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed catalog of monitorable metrics

use serde::Serialize;
use std::fmt;

/// Display unit appended to a metric's threshold value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Percent,
    Milliseconds,
    Celsius,
    PerMinute,
    None,
}

impl Unit {
    /// Suffix written directly after the value, with no separating space
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Milliseconds => "ms",
            Unit::Celsius => "°C",
            Unit::PerMinute => "/min",
            Unit::None => "",
        }
    }

    /// Inclusive value range accepted from user input, if bounded
    pub fn bounds(self) -> Option<(i64, i64)> {
        match self {
            Unit::Percent => Some((0, 100)),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDef {
    /// Name as it appears in persisted condition strings
    pub name: &'static str,
    /// Human-readable label for pickers
    pub label: &'static str,
    pub unit: Unit,
}

impl MetricDef {
    const fn new(name: &'static str, label: &'static str, unit: Unit) -> Self {
        Self { name, label, unit }
    }
}

impl fmt::Display for MetricDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::None => write!(f, "{}", self.name),
            unit => write!(f, "{} ({})", self.name, unit),
        }
    }
}

pub const METRIC_CATALOG: [MetricDef; 9] = [
    MetricDef::new("CPU", "CPU Utilization", Unit::Percent),
    MetricDef::new("Memory", "Memory Usage", Unit::Percent),
    MetricDef::new("Disk", "Disk Usage", Unit::Percent),
    MetricDef::new("Bandwidth", "Bandwidth Utilization", Unit::Percent),
    MetricDef::new("Latency", "Network Latency", Unit::Milliseconds),
    MetricDef::new("Packet Loss", "Packet Loss", Unit::Percent),
    MetricDef::new("Interface Errors", "Interface Errors", Unit::PerMinute),
    MetricDef::new("Response Time", "Response Time", Unit::Milliseconds),
    MetricDef::new("Temperature", "Device Temperature", Unit::Celsius),
];

/// Look up a catalog entry by exact name
pub fn find_metric(name: &str) -> Option<&'static MetricDef> {
    METRIC_CATALOG.iter().find(|m| m.name == name)
}

/// Unit for a metric name; unknown metrics have no unit
pub fn unit_for(name: &str) -> Unit {
    find_metric(name).map_or(Unit::None, |m| m.unit)
}

#[cfg(test)]
#[path = "metric_tests.rs"]
mod tests;
