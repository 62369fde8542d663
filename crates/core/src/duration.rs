// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durations as entered on rule and maintenance forms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown duration unit: {0:?} (expected seconds, minutes, hours or days)")]
pub struct ParseUnitError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration must be at least 1")]
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 4] = [
        DurationUnit::Seconds,
        DurationUnit::Minutes,
        DurationUnit::Hours,
        DurationUnit::Days,
    ];

    pub fn plural(self) -> &'static str {
        match self {
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
        }
    }

    pub fn singular(self) -> &'static str {
        let plural = self.plural();
        &plural[..plural.len() - 1]
    }

    pub fn seconds(self) -> u64 {
        match self {
            DurationUnit::Seconds => 1,
            DurationUnit::Minutes => 60,
            DurationUnit::Hours => 3_600,
            DurationUnit::Days => 86_400,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Accepts singular or plural spelling in any case
impl FromStr for DurationUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_ascii_lowercase();
        DurationUnit::ALL
            .into_iter()
            .find(|unit| word == unit.plural() || word == unit.singular())
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

/// A positive whole number of seconds, minutes, hours or days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl Duration {
    pub fn new(value: u32, unit: DurationUnit) -> Result<Self, DurationError> {
        if value == 0 {
            return Err(DurationError::Zero);
        }
        Ok(Self { value, unit })
    }

    pub fn as_secs(&self) -> u64 {
        u64::from(self.value) * self.unit.seconds()
    }

    pub fn to_time_delta(&self) -> chrono::TimeDelta {
        // u32 * 86_400 always fits in i64
        chrono::TimeDelta::seconds(self.as_secs() as i64)
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
