// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold condition commands

use crate::output::{self, OutputFormat};
use clap::{Args, Subcommand};
use noc_codec::{decode_condition, ConditionForm};
use noc_core::{Condition, Operator};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ConditionArgs {
    #[command(subcommand)]
    pub command: ConditionCommand,
}

#[derive(Subcommand)]
pub enum ConditionCommand {
    /// Parse condition text such as "CPU > 90%"
    Decode { text: String },
    /// Build condition text; values outside the metric's range are clamped
    #[command(allow_negative_numbers = true)]
    Encode {
        metric: String,
        /// One of >, <, >=, <=, ==, !=
        operator: Operator,
        value: i64,
    },
}

#[derive(Serialize)]
struct Decoded {
    #[serde(flatten)]
    condition: Condition,
    pass_through: bool,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(operator) = self.condition.operator else {
            writeln!(f, "{:<9} {}", "metric", self.condition.metric)?;
            return write!(f, "(not a recognised condition)");
        };
        writeln!(f, "{:<9} {}", "metric", self.condition.metric)?;
        writeln!(f, "{:<9} {}", "operator", operator)?;
        write!(f, "{:<9} {}", "value", self.condition.value)
    }
}

#[derive(Serialize)]
pub struct Encoded {
    pub text: String,
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn handle(command: ConditionCommand, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        ConditionCommand::Decode { text } => {
            let condition = decode_condition(&text);
            let decoded = Decoded {
                pass_through: condition.is_pass_through(),
                condition,
            };
            output::print(&decoded, format)?;
        }
        ConditionCommand::Encode {
            metric,
            operator,
            value,
        } => {
            let form = ConditionForm::new(metric, operator, value);
            if form.value() != value {
                tracing::info!(requested = value, clamped = form.value(), "value clamped");
            }
            output::print(&Encoded { text: form.encode() }, format)?;
        }
    }
    Ok(())
}
