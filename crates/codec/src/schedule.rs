// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schedule strings: `Every <Weekday> <HH>:<MM> UTC`

use noc_core::{Schedule, Weekday};
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_SCHEDULE_DAY: Weekday = Weekday::Sunday;
pub const DEFAULT_SCHEDULE_HOUR: u8 = 2;
pub const DEFAULT_SCHEDULE_MINUTE: u8 = 0;

#[allow(clippy::expect_used)]
static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:every\s+)?\b(sunday|monday|tuesday|wednesday|thursday|friday|saturday)\b")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("constant regex pattern is valid"));

/// Decode a weekly schedule
///
/// The weekday and the time are matched independently. A missing weekday
/// falls back to [`DEFAULT_SCHEDULE_DAY`]; a missing or out-of-range time
/// falls back to [`DEFAULT_SCHEDULE_HOUR`]:[`DEFAULT_SCHEDULE_MINUTE`].
/// Text that isn't a weekly recurrence (e.g. a one-off date) decodes
/// entirely to the defaults.
pub fn decode_schedule(text: &str) -> Schedule {
    let day = DAY_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<Weekday>().ok())
        .unwrap_or(DEFAULT_SCHEDULE_DAY);

    let time = TIME_PATTERN.captures(text).and_then(|caps| {
        let hour = caps[1].parse::<u8>().ok()?;
        let minute = caps[2].parse::<u8>().ok()?;
        Schedule::new(day, hour, minute).ok()
    });

    time.unwrap_or_else(|| {
        tracing::debug!(text, "no valid time in schedule, using default");
        Schedule {
            day,
            hour: DEFAULT_SCHEDULE_HOUR,
            minute: DEFAULT_SCHEDULE_MINUTE,
        }
    })
}

/// Encode a weekly schedule with zero-padded time
pub fn encode_schedule(day: Weekday, hour: u8, minute: u8) -> String {
    format!("Every {} {:02}:{:02} UTC", day, hour, minute)
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
