// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console settings commands

use crate::config::Config;
use crate::error::NocError;
use crate::output::{self, OutputFormat};
use clap::{Args, Subcommand};
use noc_adapters::{
    FileSettingsCache, HttpSettingsStore, TracedSettingsCache, TracedSettingsStore,
};
use noc_core::{GlobalSettings, SettingKey};
use noc_engine::{SettingsController, SettingsSource, ToggleOutcome};
use serde::Serialize;
use std::fmt;
use std::process::ExitCode;

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings and where they came from
    Show,
    /// Flip one setting and save it
    Toggle {
        /// maintenanceMode, autoResolve or aiCorrelation
        key: SettingKey,
    },
}

#[derive(Serialize)]
struct SettingsView {
    settings: GlobalSettings,
    source: SettingsSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<bool>,
}

impl fmt::Display for SettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.settings)?;
        write!(f, "{:<16} {}", "(loaded from)", self.source)
    }
}

pub async fn handle(
    command: SettingsCommand,
    config: &Config,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let store = TracedSettingsStore::new(HttpSettingsStore::new(&config.api_url));
    let cache = TracedSettingsCache::new(FileSettingsCache::new(&config.cache_path));
    let controller = SettingsController::new(store, cache);

    let loaded = controller.load().await;

    match command {
        SettingsCommand::Show => {
            let view = SettingsView {
                settings: loaded.settings,
                source: loaded.source,
                saved: None,
            };
            output::print(&view, format)?;
            Ok(ExitCode::SUCCESS)
        }
        SettingsCommand::Toggle { key } => {
            let outcome = controller.toggle(key).await;
            let view = SettingsView {
                settings: outcome.settings(),
                source: loaded.source,
                saved: Some(matches!(outcome, ToggleOutcome::Applied { .. })),
            };
            output::print(&view, format)?;

            match outcome {
                ToggleOutcome::Applied { .. } => Ok(ExitCode::SUCCESS),
                ToggleOutcome::Reverted {
                    reverted_to,
                    reason,
                } => {
                    let warning = NocError::setting_not_saved(
                        key,
                        reverted_to.get(key),
                        &reason,
                        &config.api_url,
                    );
                    eprint!("{}", warning);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
