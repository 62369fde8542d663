// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metric catalog listing

use crate::output::{self, OutputFormat};
use noc_core::{MetricDef, METRIC_CATALOG};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct MetricRow {
    #[serde(flatten)]
    def: MetricDef,
    suffix: &'static str,
}

impl fmt::Display for MetricRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<14} {:<22} {}", self.def.name, self.def.label, self.suffix)
    }
}

pub fn handle(format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<MetricRow> = METRIC_CATALOG
        .iter()
        .map(|def| MetricRow {
            def: *def,
            suffix: def.unit.suffix(),
        })
        .collect();
    output::print_list(&rows, format)
}
