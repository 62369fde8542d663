//! Settings toggle specs

use crate::prelude::*;

#[test]
fn failed_save_reverts_and_caches_original() {
    let console = Console::offline();

    console
        .noc()
        .args(&["settings", "toggle", "maintenanceMode"])
        .fails()
        .code_is(1)
        .stdout_has("maintenanceMode  off\n")
        .stderr_has("warning: maintenanceMode was not saved and stays off");

    assert_eq!(
        console.read_cached_settings(),
        Some(serde_json::json!({
            "maintenanceMode": false,
            "autoResolve": true,
            "aiCorrelation": true
        }))
    );
}

#[test]
fn failed_save_keeps_cached_value() {
    let console = Console::offline();
    console.cached_settings(r#"{"maintenanceMode":true,"autoResolve":true,"aiCorrelation":true}"#);

    console
        .noc()
        .args(&["settings", "toggle", "maintenance-mode"])
        .fails()
        .stderr_has("stays on");

    let cached = console.read_cached_settings().unwrap();
    assert_eq!(cached["maintenanceMode"], true);
}

#[test]
fn rejected_save_is_reported() {
    let console = Console::offline();
    let api = FakeApi::serve(2, r#"{"auto_resolve_enabled":true}"#, "503 Service Unavailable");

    console
        .noc()
        .env("NOC_API_URL", &api.url)
        .args(&["settings", "toggle", "autoResolve"])
        .fails()
        .stdout_has("autoResolve      on\n")
        .stderr_has("status 503");
}

#[test]
fn successful_save_sends_only_the_toggled_field() {
    let console = Console::offline();
    let api = FakeApi::serve(
        2,
        r#"{"maintenance_mode":false,"auto_resolve_enabled":true,"ai_correlation_enabled":true}"#,
        "200 OK",
    );

    let run = console
        .noc()
        .env("NOC_API_URL", &api.url)
        .args(&["settings", "toggle", "aiCorrelation", "--format", "json"])
        .passes();
    let json = run.json();
    assert_eq!(json["saved"], true);
    assert_eq!(json["source"], "remote");
    assert_eq!(json["settings"]["aiCorrelation"], false);

    let requests = api.requests(2);
    assert!(requests[0].starts_with("GET /api/settings "));
    assert!(requests[1].starts_with("PUT /api/settings "));
    assert!(requests[1].ends_with(r#"{"ai_correlation_enabled":false}"#));

    // Cache is only written after a failed save
    assert_eq!(console.read_cached_settings(), None);
}

#[test]
fn unknown_setting_is_rejected() {
    let console = Console::offline();

    console
        .noc()
        .args(&["settings", "toggle", "darkMode"])
        .fails()
        .code_is(2)
        .stderr_has("darkMode");
}
