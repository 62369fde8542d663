// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weekly recurrence used by maintenance windows
//!
//! Schedules are always weekly and always in UTC; there is no one-off date
//! form.

use chrono::{DateTime, Datelike, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SCHEDULE_TIMEZONE: &str = "UTC";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown weekday: {0:?}")]
pub struct ParseWeekdayError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("hour out of range (0-23): {0}")]
    Hour(u8),
    #[error("minute out of range (0-59): {0}")]
    Minute(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Sunday-first, as shown in the day picker
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn num_days_from_sunday(self) -> u32 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive full weekday name
impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

/// Weekly start time of a maintenance window
///
/// Deserializing applies the same range checks as [`Schedule::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ScheduleFields")]
pub struct Schedule {
    pub day: Weekday,
    pub hour: u8,
    pub minute: u8,
}

#[derive(Deserialize)]
struct ScheduleFields {
    day: Weekday,
    hour: u8,
    minute: u8,
}

impl TryFrom<ScheduleFields> for Schedule {
    type Error = ScheduleError;

    fn try_from(fields: ScheduleFields) -> Result<Self, Self::Error> {
        Schedule::new(fields.day, fields.hour, fields.minute)
    }
}

impl Schedule {
    pub fn new(day: Weekday, hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::Hour(hour));
        }
        if minute > 59 {
            return Err(ScheduleError::Minute(minute));
        }
        Ok(Self { day, hour, minute })
    }

    pub fn timezone(&self) -> &'static str {
        SCHEDULE_TIMEZONE
    }

    fn time_of_day(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }

    /// Most recent occurrence at or before `now`
    pub fn last_start_at_or_before(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.weekday().num_days_from_sunday();
        let days_back = (today + 7 - self.day.num_days_from_sunday()) % 7;
        let date = now.date_naive() - TimeDelta::days(i64::from(days_back));
        let start = date.and_time(self.time_of_day()).and_utc();
        if start > now {
            start - TimeDelta::weeks(1)
        } else {
            start
        }
    }

    /// First occurrence strictly after `now`
    pub fn next_start_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.last_start_at_or_before(now) + TimeDelta::weeks(1)
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
