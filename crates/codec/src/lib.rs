// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Text codec for rule configuration strings
//!
//! Decoders are total: malformed text degrades to a documented default
//! instead of an error, so every persisted field stays renderable.

mod condition;
mod duration;
mod form;
mod schedule;
mod window;

pub use condition::{decode_condition, encode_condition, render_condition};
pub use duration::{decode_duration, encode_duration, DEFAULT_DURATION};
pub use form::{clamp_value, ConditionForm, MaintenanceForm, RuleForm};
pub use schedule::{
    decode_schedule, encode_schedule, DEFAULT_SCHEDULE_DAY, DEFAULT_SCHEDULE_HOUR,
    DEFAULT_SCHEDULE_MINUTE,
};
pub use window::{window_status, WindowStatus};
