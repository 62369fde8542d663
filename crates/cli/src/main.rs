// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! noc - operations console toolkit

mod commands;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{condition, duration, metrics, schedule, settings};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::NocError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "noc",
    version,
    about = "noc - Rule text codec and console settings for network operations"
)]
struct Cli {
    /// Base URL of the console API
    #[arg(long, global = true, env = "NOC_API_URL")]
    api_url: Option<String>,

    /// Local settings cache file
    #[arg(long, global = true, env = "NOC_CACHE_PATH")]
    cache_path: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "NOC_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the metric catalog
    Metrics,
    /// Threshold condition text
    Condition(condition::ConditionArgs),
    /// Duration text
    Duration(duration::DurationArgs),
    /// Maintenance schedule text
    Schedule(schedule::ScheduleArgs),
    /// Console-wide settings
    Settings(settings::SettingsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<NocError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli.format;
    match cli.command {
        Commands::Metrics => metrics::handle(format)?,
        Commands::Condition(args) => condition::handle(args.command, format)?,
        Commands::Duration(args) => duration::handle(args.command, format)?,
        Commands::Schedule(args) => schedule::handle(args.command, format)?,
        Commands::Settings(args) => {
            let config = Config::resolve(cli.api_url, cli.cache_path, cli.config)?;
            return settings::handle(args.command, &config, format).await;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
