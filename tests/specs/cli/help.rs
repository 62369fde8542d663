//! Top-level CLI specs

use crate::prelude::*;

#[test]
fn help_lists_command_groups() {
    noc()
        .args(&["--help"])
        .passes()
        .stdout_has("condition")
        .stdout_has("duration")
        .stdout_has("schedule")
        .stdout_has("settings")
        .stdout_has("metrics");
}

#[test]
fn unknown_command_fails() {
    noc().args(&["frobnicate"]).fails().code_is(2);
}

#[test]
fn metrics_lists_catalog() {
    noc()
        .args(&["metrics"])
        .passes()
        .stdout_has("CPU            CPU Utilization        %\n")
        .stdout_has("Latency")
        .stdout_has("Temperature");
}

#[test]
fn metrics_json_has_every_entry() {
    let run = noc().args(&["metrics", "--format", "json"]).passes();
    let rows = run.json();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0]["name"], "CPU");
    assert_eq!(rows[0]["unit"], "percent");
    assert_eq!(rows[0]["suffix"], "%");
}
