//! Settings load specs
//!
//! Remote first, then the local cache, then built-in defaults.

use crate::prelude::*;

#[test]
fn offline_without_cache_shows_defaults() {
    let console = Console::offline();

    console
        .noc()
        .args(&["settings", "show"])
        .passes()
        .stdout_eq(
            "maintenanceMode  off\n\
             autoResolve      on\n\
             aiCorrelation    on\n\
             (loaded from)    defaults\n",
        );
}

#[test]
fn offline_uses_cached_snapshot() {
    let console = Console::offline();
    console.cached_settings(r#"{"maintenanceMode":true,"autoResolve":false,"aiCorrelation":true}"#);

    let run = console
        .noc()
        .args(&["settings", "show", "--format", "json"])
        .passes();
    let json = run.json();
    assert_eq!(json["source"], "cache");
    assert_eq!(json["settings"]["maintenanceMode"], true);
    assert_eq!(json["settings"]["autoResolve"], false);
    assert_eq!(json["settings"]["aiCorrelation"], true);
}

#[test]
fn malformed_cached_snapshot_falls_back_to_defaults() {
    let console = Console::offline();
    console.cached_settings("{maintenanceMode: yes");

    console
        .noc()
        .args(&["settings", "show"])
        .passes()
        .stdout_has("(loaded from)    defaults");
}

#[test]
fn remote_settings_win() {
    let console = Console::offline();
    console.cached_settings(r#"{"maintenanceMode":false}"#);
    let api = FakeApi::serve(
        1,
        r#"{"maintenance_mode":true,"auto_resolve_enabled":true,"ai_correlation_enabled":false}"#,
        "200 OK",
    );

    console
        .noc()
        .env("NOC_API_URL", &api.url)
        .args(&["settings", "show"])
        .passes()
        .stdout_eq(
            "maintenanceMode  on\n\
             autoResolve      on\n\
             aiCorrelation    off\n\
             (loaded from)    remote\n",
        );

    let requests = api.requests(1);
    assert!(requests[0].starts_with("GET /api/settings "));
}

#[test]
fn api_url_from_config_file() {
    let console = Console::offline();
    let api = FakeApi::serve(1, r#"{"maintenance_mode":true}"#, "200 OK");
    console.file("config.toml", &format!("api_url = \"{}\"\n", api.url));

    let run = console
        .noc()
        .env_remove("NOC_API_URL")
        .args(&["settings", "show", "--format", "json"])
        .passes();
    assert_eq!(run.json()["source"], "remote");
}

#[test]
fn malformed_config_file_is_an_error() {
    let console = Console::offline();
    console.file("config.toml", "api_url = [\n");

    console
        .noc()
        .args(&["settings", "show"])
        .fails()
        .code_is(1)
        .stderr_has("error: invalid configuration file");
}
