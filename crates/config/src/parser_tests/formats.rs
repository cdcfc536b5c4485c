// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-format parsing tests: TOML, JSON, and HCL.

use std::path::Path;

use crate::{parse_config, CronConfig, Format};

/// Shared assertions for the sample config across all three formats.
fn assert_sample_config(config: &CronConfig) {
    assert_eq!(config.output().file, "/var/log/cron.log");
    assert!(!config.output().append);

    let names: Vec<&str> = config.crons.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["cleanup", "report"]);

    let cleanup = &config.crons["cleanup"];
    assert_eq!(cleanup.name, "cleanup");
    assert_eq!(cleanup.command.as_deref(), Some("app:cleanup"));
    assert_eq!(cleanup.minutes, "*/5");
    assert_eq!(cleanup.hours, "*");
    assert_eq!(cleanup.arguments, vec!["--force", "-v"]);
    assert_eq!(cleanup.output.file.as_deref(), Some("/var/log/cleanup.log"));
    assert!(cleanup.enabled);

    let report = &config.crons["report"];
    assert_eq!(report.command.as_deref(), Some("app:report"));
    assert_eq!(report.schedule(), "0 6 * * 1");
    assert!(!report.enabled);
}

// ============================================================================
// TOML Format
// ============================================================================

const SAMPLE_TOML: &str = r#"
[options.output]
file = "/var/log/cron.log"

[cron.cleanup]
command = "app:cleanup"
minutes = "*/5"
arguments = ["--force", "-v"]
output = { file = "/var/log/cleanup.log" }

[cron.report]
command = "app:report"
minutes = "0"
hours = "6"
weekdays = "1"
enabled = false
"#;

#[test]
fn parse_toml_sample() {
    assert_sample_config(&parse_config(SAMPLE_TOML).unwrap());
}

// ============================================================================
// JSON Format
// ============================================================================

const SAMPLE_JSON: &str = r#"
{
  "options": { "output": { "file": "/var/log/cron.log" } },
  "cron": {
    "cleanup": {
      "command": "app:cleanup",
      "minutes": "*/5",
      "arguments": ["--force", "-v"],
      "output": { "file": "/var/log/cleanup.log" }
    },
    "report": {
      "command": "app:report",
      "minutes": "0",
      "hours": "6",
      "weekdays": "1",
      "enabled": false
    }
  }
}
"#;

#[test]
fn parse_json_sample() {
    assert_sample_config(&super::parse_json(SAMPLE_JSON));
}

// ============================================================================
// HCL Format
// ============================================================================

const SAMPLE_HCL: &str = r#"
options {
  output {
    file = "/var/log/cron.log"
  }
}

cron "cleanup" {
  command   = "app:cleanup"
  minutes   = "*/5"
  arguments = ["--force", "-v"]
  output    = { file = "/var/log/cleanup.log" }
}

cron "report" {
  command  = "app:report"
  minutes  = "0"
  hours    = "6"
  weekdays = "1"
  enabled  = false
}
"#;

#[test]
fn parse_hcl_sample() {
    assert_sample_config(&super::parse_hcl(SAMPLE_HCL));
}

// ============================================================================
// Ordering and format detection
// ============================================================================

#[test]
fn toml_preserves_definition_order() {
    let toml = r#"
[cron.zeta]
command = "app:z"

[cron.alpha]
command = "app:a"

[cron.mid]
command = "app:m"
"#;
    let config = parse_config(toml).unwrap();
    let names: Vec<&str> = config.crons.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn json_preserves_definition_order() {
    let config = super::parse_json(
        r#"{"crons": {"zeta": {"command": "z"}, "alpha": {"command": "a"}}}"#,
    );
    let names: Vec<&str> = config.crons.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

#[yare::parameterized(
    hcl = { "cron.hcl", Format::Hcl },
    json = { "config/cron.json", Format::Json },
    toml = { "cron.toml", Format::Toml },
    no_extension = { "crontab", Format::Toml },
    unknown = { "cron.yaml", Format::Toml },
)]
fn format_from_path(path: &str, expected: Format) {
    assert_eq!(Format::from_path(Path::new(path)), expected);
}
