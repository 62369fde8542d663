// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maintenance window status from its encoded schedule and duration

use crate::{decode_duration, decode_schedule};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WindowStatus {
    Active {
        started_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    },
    Upcoming {
        starts_at: DateTime<Utc>,
    },
}

impl fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowStatus::Active { ends_at, .. } => {
                write!(f, "active until {}", ends_at.format("%Y-%m-%d %H:%M UTC"))
            }
            WindowStatus::Upcoming { starts_at } => {
                write!(f, "next start {}", starts_at.format("%Y-%m-%d %H:%M UTC"))
            }
        }
    }
}

/// Whether a weekly window is open at `now`
///
/// The window is active on `[start, start + duration)`. Windows of a week
/// or longer are always active; an end past the calendar saturates at the
/// latest representable instant.
pub fn window_status(schedule: &str, duration: &str, now: DateTime<Utc>) -> WindowStatus {
    let schedule = decode_schedule(schedule);
    let length = decode_duration(duration).to_time_delta();

    let started_at = schedule.last_start_at_or_before(now);
    let ends_at = match started_at.checked_add_signed(length) {
        Some(ends_at) if length < TimeDelta::weeks(1) => ends_at,
        // Covers every following start as well
        Some(ends_at) => {
            return WindowStatus::Active {
                started_at,
                ends_at,
            }
        }
        None => {
            return WindowStatus::Active {
                started_at,
                ends_at: DateTime::<Utc>::MAX_UTC,
            }
        }
    };
    if now < ends_at {
        WindowStatus::Active {
            started_at,
            ends_at,
        }
    } else {
        WindowStatus::Upcoming {
            starts_at: schedule.next_start_after(now),
        }
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
