// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing diagnostics with context and suggestions

use noc_adapters::StoreError;
use noc_core::SettingKey;
use std::fmt;
use std::path::Path;

/// Diagnostic with context and recovery suggestions
#[derive(Debug)]
pub struct NocError {
    level: &'static str,
    pub message: String,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
}

impl NocError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: "error",
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Same layout, reported as a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: "warning",
            ..Self::new(message)
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// A toggle whose remote write failed and was rolled back
    pub fn setting_not_saved(
        key: SettingKey,
        kept: bool,
        reason: &StoreError,
        api_url: &str,
    ) -> Self {
        let state = if kept { "on" } else { "off" };
        let suggestion = match reason {
            StoreError::Transport(_) => {
                format!("Check that the console API is reachable at {}", api_url)
            }
            StoreError::Status(_) => "Retry once the console API is healthy".to_string(),
            StoreError::Decode(_) => format!("Check that {} points at the console API", api_url),
        };
        NocError::warning(format!("{} was not saved and stays {}", key, state))
            .with_context(reason.to_string())
            .with_suggestion(suggestion)
    }

    /// Configuration file that exists but cannot be used
    pub fn bad_config(path: &Path, reason: impl fmt::Display) -> Self {
        NocError::new(format!("invalid configuration file {}", path.display()))
            .with_context(reason.to_string())
            .with_suggestion("Fix the file or point --config at another one")
    }
}

impl fmt::Display for NocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.level, self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for NocError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
