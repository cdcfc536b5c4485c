// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse and validation errors.

use super::{assert_hcl_err, assert_toml_err};

#[test]
fn unknown_cron_field_rejected() {
    assert_toml_err(
        "[cron.cron_def]\ncommand = \"app:cmd\"\nminute = \"5\"\n",
        &["minute"],
    );
}

#[test]
fn unknown_top_level_key_rejected() {
    assert_toml_err("[jobs.cron_def]\ncommand = \"app:cmd\"\n", &["jobs"]);
}

#[test]
fn unknown_output_field_rejected() {
    assert_toml_err("[options.output]\npath = \"/tmp/x\"\n", &["path"]);
}

#[test]
fn wrong_type_rejected() {
    assert_toml_err(
        "[cron.cron_def]\ncommand = \"app:cmd\"\nenabled = \"no\"\n",
        &["TOML parse error"],
    );
}

#[test]
fn invalid_toml_syntax() {
    assert_toml_err("[cron.cron_def\n", &["TOML parse error"]);
}

#[yare::parameterized(
    minutes = { "minutes" },
    hours = { "hours" },
    days = { "days" },
    months = { "months" },
    weekdays = { "weekdays" },
)]
fn schedule_field_with_whitespace_rejected(field: &str) {
    let toml = format!("[cron.cron_def]\ncommand = \"app:cmd\"\n{field} = \"1 2\"\n");
    let location = format!("cron.cron_def.{field}");
    assert_toml_err(&toml, &[location.as_str(), "must not contain whitespace"]);
}

#[test]
fn empty_schedule_field_rejected() {
    assert_toml_err(
        "[cron.cron_def]\ncommand = \"app:cmd\"\nhours = \"\"\n",
        &["cron.cron_def.hours", "must not be empty"],
    );
}

#[test]
fn empty_cron_name_rejected() {
    assert_toml_err(
        "[cron.\"\"]\ncommand = \"app:cmd\"\n",
        &["cron name must not be empty"],
    );
}

#[test]
fn line_break_in_argument_rejected() {
    assert_toml_err(
        "[cron.cron_def]\ncommand = \"app:cmd\"\narguments = [\"-d\", \"a\\nb\"]\n",
        &["cron.cron_def.arguments[1]", "line breaks"],
    );
}

#[test]
fn line_break_in_global_output_rejected() {
    assert_toml_err(
        "[options.output]\nfile = \"/tmp/a\\n/tmp/b\"\n",
        &["options.output.file"],
    );
}

#[test]
fn hcl_schedule_error_reports_location() {
    let hcl = r#"
cron "nightly" {
  command = "app:nightly"
  hours   = "  "
}
"#;
    assert_hcl_err(hcl, &["cron.nightly.hours"]);
}

#[test]
fn unsafe_arguments_are_not_rejected() {
    let config = crate::parse_config(
        "[cron.cron_def]\ncommand = \"app:cmd\"\narguments = [\"$(rm -rf /)\", \"; echo\"]\n",
    )
    .unwrap();
    assert_eq!(config.crons["cron_def"].arguments.len(), 2);
}

#[yare::parameterized(
    empty_field = { "hours = \"\"" },
    spaced_field = { "minutes = \"1 2\"" },
    line_break_in_command = { "command = \"a\\nb\"" },
    line_break_in_output = { "output = { file = \"/tmp/a\\n/tmp/b\" }" },
)]
fn disabled_cron_fields_are_not_validated(field: &str) {
    let toml = format!("[cron.ok]\ncommand = \"app:ok\"\n\n[cron.off]\nenabled = false\n{field}\n");
    let config = crate::parse_config(&toml).unwrap();
    assert!(!config.crons["off"].enabled);
    assert_eq!(config.crons.len(), 2);
}
