//! Schedule text and window status specs

use crate::prelude::*;

#[test]
fn decode_weekly_schedule() {
    noc()
        .args(&["schedule", "decode", "Every Saturday 23:30 UTC"])
        .passes()
        .stdout_eq("Saturday 23:30 UTC\n");
}

#[test]
fn decode_one_time_schedule_uses_default() {
    noc()
        .args(&["schedule", "decode", "One-time: Oct 24, 2025"])
        .passes()
        .stdout_eq("Sunday 02:00 UTC\n");
}

#[test]
fn encode_pads_time() {
    noc()
        .args(&["schedule", "encode", "monday", "4", "5"])
        .passes()
        .stdout_eq("Every Monday 04:05 UTC\n");
}

#[test]
fn encode_rejects_out_of_range_hour() {
    noc().args(&["schedule", "encode", "sunday", "24", "0"]).fails();
}

#[test]
fn status_inside_window() {
    noc()
        .args(&[
            "schedule",
            "status",
            "Every Sunday 02:00 UTC",
            "4 hours",
            "--at",
            "2026-10-11T03:00:00Z",
        ])
        .passes()
        .stdout_eq("active until 2026-10-11 06:00 UTC\n");
}

#[test]
fn status_after_window() {
    let run = noc()
        .args(&[
            "schedule",
            "status",
            "Every Sunday 02:00 UTC",
            "4 hours",
            "--at",
            "2026-10-11T07:00:00Z",
            "--format",
            "json",
        ])
        .passes();
    let json = run.json();
    assert_eq!(json["status"], "upcoming");
    assert_eq!(json["starts_at"], "2026-10-18T02:00:00Z");
}

#[test]
fn status_with_huge_duration_stays_active() {
    noc()
        .args(&[
            "schedule",
            "status",
            "Every Sunday 02:00 UTC",
            "100000000 days",
            "--at",
            "2026-10-15T00:00:00Z",
        ])
        .passes()
        .stdout_has("active until");
}
