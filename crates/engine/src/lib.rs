// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Optimistic settings controller for the operations console

mod controller;

pub use controller::{
    Loaded, SettingsController, SettingsSource, ToggleOutcome, SETTINGS_CACHE_KEY,
};
