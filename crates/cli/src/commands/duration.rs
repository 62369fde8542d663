// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration text commands

use super::condition::Encoded;
use crate::output::{self, OutputFormat};
use clap::{Args, Subcommand};
use noc_codec::{decode_duration, encode_duration};
use noc_core::{Duration, DurationUnit};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct DurationArgs {
    #[command(subcommand)]
    pub command: DurationCommand,
}

#[derive(Subcommand)]
pub enum DurationCommand {
    /// Parse duration text such as "5 minutes"
    Decode { text: String },
    /// Build duration text
    Encode {
        value: u32,
        /// seconds, minutes, hours or days
        unit: DurationUnit,
    },
}

#[derive(Serialize)]
struct Decoded {
    #[serde(flatten)]
    duration: Duration,
    seconds: u64,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}s)",
            encode_duration(self.duration.value, self.duration.unit),
            self.seconds
        )
    }
}

pub fn handle(command: DurationCommand, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        DurationCommand::Decode { text } => {
            let duration = decode_duration(&text);
            output::print(
                &Decoded {
                    seconds: duration.as_secs(),
                    duration,
                },
                format,
            )?;
        }
        DurationCommand::Encode { value, unit } => {
            let duration = Duration::new(value, unit)?;
            let text = encode_duration(duration.value, duration.unit);
            output::print(&Encoded { text }, format)?;
        }
    }
    Ok(())
}
