//! Duration text specs

use crate::prelude::*;

#[test]
fn decode_minutes() {
    noc()
        .args(&["duration", "decode", "5 minutes"])
        .passes()
        .stdout_eq("5 minutes (300s)\n");
}

#[test]
fn decode_garbage_uses_default() {
    noc()
        .args(&["duration", "decode", "until further notice"])
        .passes()
        .stdout_eq("2 hours (7200s)\n");
}

#[test]
fn encode_singular() {
    noc()
        .args(&["duration", "encode", "1", "hours"])
        .passes()
        .stdout_eq("1 hour\n");
}

#[test]
fn encode_zero_fails() {
    noc().args(&["duration", "encode", "0", "minutes"]).fails();
}
