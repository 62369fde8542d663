// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings: `<integer> <second|minute|hour|day>(s)`

use noc_core::{Duration, DurationUnit};
use regex::Regex;
use std::sync::LazyLock;

/// Used when text carries no recognizable duration
pub const DEFAULT_DURATION: Duration = Duration {
    value: 2,
    unit: DurationUnit::Hours,
};

#[allow(clippy::expect_used)]
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(second|minute|hour|day)s?\b").expect("constant regex pattern is valid")
});

/// Decode a duration, normalizing the unit to its plural form
///
/// Both `1 hour` and `1 hours` decode to one hour. Zero, overflowing, or
/// unrecognized values fall back to [`DEFAULT_DURATION`].
pub fn decode_duration(text: &str) -> Duration {
    let parsed = DURATION_PATTERN.captures(text).and_then(|caps| {
        let value = caps[1].parse::<u32>().ok()?;
        let unit = caps[2].parse::<DurationUnit>().ok()?;
        Duration::new(value, unit).ok()
    });

    parsed.unwrap_or_else(|| {
        tracing::debug!(text, "unrecognized duration, using default");
        DEFAULT_DURATION
    })
}

/// Encode a duration; a value of 1 uses the singular unit
pub fn encode_duration(value: u32, unit: DurationUnit) -> String {
    if value == 1 {
        format!("{} {}", value, unit.singular())
    } else {
        format!("{} {}", value, unit.plural())
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
