// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

fn at(d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    // October 2026: the 11th is a Sunday
    Utc.with_ymd_and_hms(2026, 10, d, h, mi, 0).unwrap()
}

#[test]
fn active_inside_window() {
    let status = window_status("Every Sunday 02:00 UTC", "2 hours", at(11, 3, 0));
    assert_eq!(
        status,
        WindowStatus::Active {
            started_at: at(11, 2, 0),
            ends_at: at(11, 4, 0),
        }
    );
}

#[test]
fn active_at_exact_start() {
    let status = window_status("Every Sunday 02:00 UTC", "2 hours", at(11, 2, 0));
    assert!(matches!(status, WindowStatus::Active { .. }));
}

#[test]
fn end_is_exclusive() {
    let status = window_status("Every Sunday 02:00 UTC", "2 hours", at(11, 4, 0));
    assert_eq!(
        status,
        WindowStatus::Upcoming {
            starts_at: at(18, 2, 0)
        }
    );
}

#[test]
fn upcoming_before_start() {
    let status = window_status("Every Saturday 22:00 UTC", "4 hours", at(15, 12, 0));
    assert_eq!(
        status,
        WindowStatus::Upcoming {
            starts_at: at(17, 22, 0)
        }
    );
}

#[test]
fn window_spanning_midnight() {
    // Saturday 22:00 + 4h runs into Sunday
    let status = window_status("Every Saturday 22:00 UTC", "4 hours", at(18, 1, 0));
    assert_eq!(
        status,
        WindowStatus::Active {
            started_at: at(17, 22, 0),
            ends_at: at(18, 2, 0),
        }
    );
}

#[test]
fn display_formats_utc() {
    let status = WindowStatus::Upcoming {
        starts_at: at(18, 2, 0),
    };
    assert_eq!(status.to_string(), "next start 2026-10-18 02:00 UTC");
}

#[test]
fn serializes_with_status_tag() {
    let json = serde_json::to_value(WindowStatus::Upcoming {
        starts_at: at(18, 2, 0),
    })
    .unwrap();
    assert_eq!(json["status"], "upcoming");
    assert_eq!(json["starts_at"], "2026-10-18T02:00:00Z");
}

#[test]
fn week_long_window_is_always_active() {
    let status = window_status("Every Sunday 02:00 UTC", "7 days", at(11, 1, 0));
    assert_eq!(
        status,
        WindowStatus::Active {
            started_at: at(4, 2, 0),
            ends_at: at(11, 2, 0),
        }
    );
}

#[test]
fn duration_past_the_calendar_saturates() {
    let status = window_status("Every Sunday 02:00 UTC", "100000000 days", at(15, 0, 0));
    assert_eq!(
        status,
        WindowStatus::Active {
            started_at: at(11, 2, 0),
            ends_at: DateTime::<Utc>::MAX_UTC,
        }
    );
}
