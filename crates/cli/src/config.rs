// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection settings from flags, environment and the config file
//!
//! Flags and `NOC_*` variables win over the file; the file wins over the
//! built-in defaults.

use crate::error::NocError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub cache_path: Option<PathBuf>,
}

impl FileConfig {
    /// Read a config file; a missing file reads as empty
    pub fn load(path: &Path) -> Result<Self, NocError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(NocError::bad_config(path, e)),
        };
        toml::from_str(&text).map_err(|e| NocError::bad_config(path, e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub cache_path: PathBuf,
}

impl Config {
    pub fn resolve(
        api_url: Option<String>,
        cache_path: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, NocError> {
        let file = match config_path.or_else(default_config_path) {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        tracing::debug!(?file, "config file read");

        Ok(Self {
            api_url: api_url
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cache_path: cache_path
                .or(file.cache_path)
                .unwrap_or_else(default_cache_path),
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("noc").join("config.toml"))
}

fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("noc"))
        .unwrap_or_else(|| PathBuf::from(".noc"))
        .join("local-storage.json")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
