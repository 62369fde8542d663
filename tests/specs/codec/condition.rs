//! Condition text specs

use crate::prelude::*;

#[test]
fn decode_numeric_condition() {
    noc()
        .args(&["condition", "decode", "CPU > 90%"])
        .passes()
        .stdout_eq("metric    CPU\noperator  >\nvalue     90\n");
}

#[test]
fn decode_condition_as_json() {
    let run = noc()
        .args(&["condition", "decode", "Disk >= 95%", "--format", "json"])
        .passes();
    let json = run.json();
    assert_eq!(json["metric"], "Disk");
    assert_eq!(json["operator"], ">=");
    assert_eq!(json["value"], 95);
    assert_eq!(json["pass_through"], false);
}

#[test]
fn decode_unrecognised_text_passes_through() {
    noc()
        .args(&["condition", "decode", "link flapping on core uplinks"])
        .passes()
        .stdout_eq("metric    link flapping on core uplinks\n(not a recognised condition)\n");
}

#[test]
fn encode_appends_metric_unit() {
    noc()
        .args(&["condition", "encode", "Latency", ">=", "200"])
        .passes()
        .stdout_eq("Latency >= 200ms\n");
}

#[test]
fn encode_clamps_percentages() {
    noc()
        .args(&["condition", "encode", "CPU", ">", "150"])
        .passes()
        .stdout_eq("CPU > 100%\n");
}

#[test]
fn encode_accepts_negative_values() {
    noc()
        .args(&["condition", "encode", "Temperature", "<", "-5"])
        .passes()
        .stdout_eq("Temperature < -5°C\n");
}

#[test]
fn encode_rejects_unknown_operator() {
    noc()
        .args(&["condition", "encode", "CPU", "=>", "90"])
        .fails()
        .stderr_has("=>");
}
