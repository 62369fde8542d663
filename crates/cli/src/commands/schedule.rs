// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maintenance schedule commands

use super::condition::Encoded;
use crate::output::{self, OutputFormat};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use noc_codec::{decode_schedule, encode_schedule, window_status};
use noc_core::{Schedule, Weekday};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Subcommand)]
pub enum ScheduleCommand {
    /// Parse schedule text such as "Every Sunday 02:00 UTC"
    Decode { text: String },
    /// Build schedule text
    Encode { day: Weekday, hour: u8, minute: u8 },
    /// Whether a window with this schedule and duration is open
    Status {
        schedule: String,
        duration: String,
        /// Evaluate at this RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
}

#[derive(Serialize)]
struct Decoded {
    #[serde(flatten)]
    schedule: Schedule,
    timezone: &'static str,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02} {}",
            self.schedule.day, self.schedule.hour, self.schedule.minute, self.timezone
        )
    }
}

pub fn handle(command: ScheduleCommand, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        ScheduleCommand::Decode { text } => {
            let schedule = decode_schedule(&text);
            output::print(
                &Decoded {
                    timezone: schedule.timezone(),
                    schedule,
                },
                format,
            )?;
        }
        ScheduleCommand::Encode { day, hour, minute } => {
            let schedule = Schedule::new(day, hour, minute)?;
            let text = encode_schedule(schedule.day, schedule.hour, schedule.minute);
            output::print(&Encoded { text }, format)?;
        }
        ScheduleCommand::Status {
            schedule,
            duration,
            at,
        } => {
            let now = at.unwrap_or_else(Utc::now);
            output::print(&window_status(&schedule, &duration, now), format)?;
        }
    }
    Ok(())
}
