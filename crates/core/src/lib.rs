// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! noc-core: value objects for the network operations console
//!
//! This crate provides:
//! - Rule configuration values (conditions, durations, weekly schedules)
//! - The fixed metric catalog
//! - Global settings and their wire shapes
//! - Backend records that carry encoded configuration strings

pub mod condition;
pub mod duration;
pub mod metric;
pub mod record;
pub mod schedule;
pub mod settings;

pub use condition::{Condition, ConditionValue, Operator, ParseOperatorError};
pub use duration::{Duration, DurationError, DurationUnit, ParseUnitError};
pub use metric::{find_metric, unit_for, MetricDef, Unit, METRIC_CATALOG};
pub use record::{MaintenanceWindow, Severity, ThresholdRule};
pub use schedule::{ParseWeekdayError, Schedule, ScheduleError, Weekday, SCHEDULE_TIMEZONE};
pub use settings::{
    GlobalSettings, ParseSettingKeyError, RawSettings, SettingKey, SettingsPatch,
};
