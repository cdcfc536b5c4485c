// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cronline_config::load_config;

#[test]
fn load_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let hcl = dir.path().join("cron.hcl");
    std::fs::write(&hcl, "cron \"a\" {\n  command = \"app:a\"\n}\n").unwrap();
    let json = dir.path().join("cron.json");
    std::fs::write(&json, r#"{"cron": {"a": {"command": "app:a"}}}"#).unwrap();
    let toml = dir.path().join("cron.toml");
    std::fs::write(&toml, "[cron.a]\ncommand = \"app:a\"\n").unwrap();

    for path in [hcl, json, toml] {
        let config = load_config(&path).unwrap();
        assert_eq!(
            config.crons["a"].command.as_deref(),
            Some("app:a"),
            "{}",
            path.display()
        );
    }
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = load_config(&path).unwrap_err();
    super::assert_err_contains(&err, &["failed to read config", "missing.toml"]);
}

#[test]
fn load_surfaces_validation_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cron.toml");
    std::fs::write(&path, "[cron.a]\ncommand = \"app:a\"\ndays = \"1 15\"\n").unwrap();
    let err = load_config(&path).unwrap_err();
    super::assert_err_contains(&err, &["cron.a.days"]);
}
