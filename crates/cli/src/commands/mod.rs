// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod condition;
pub mod duration;
pub mod metrics;
pub mod schedule;
pub mod settings;
