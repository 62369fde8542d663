// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the remote settings store and the local cache

pub mod cache;
pub mod store;
pub mod traced;

pub use cache::{CacheError, FileSettingsCache, SettingsCache};
pub use store::{HttpSettingsStore, SettingsStore, StoreError};
pub use traced::{TracedSettingsCache, TracedSettingsStore};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use cache::FakeSettingsCache;
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeSettingsStore, StoreCall};
