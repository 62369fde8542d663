// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache backed by a JSON key/value file

use super::{CacheError, SettingsCache};
use async_trait::async_trait;
use noc_storage::KvFile;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSettingsCache {
    file: KvFile,
}

impl FileSettingsCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: KvFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl SettingsCache for FileSettingsCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let file = self.file.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || file.get(&key))
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?
            .map_err(CacheError::from)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let file = self.file.clone();
        let key = key.to_string();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || file.set(&key, &value))
            .await
            .map_err(|e| CacheError::Unavailable(e.to_string()))?
            .map_err(CacheError::from)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
