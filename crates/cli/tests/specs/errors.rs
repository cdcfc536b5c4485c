// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI error handling specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Render cron job definitions as crontab entries")
        .stdout_has("generate");
}

#[test]
fn missing_config_file_reports_path() {
    let temp = Project::empty();

    temp.cronline()
        .args(&["generate"])
        .fails()
        .stderr_has("Error: failed to read config 'cron.toml'");
}

#[test]
fn invalid_schedule_reports_location() {
    let temp = Project::empty();
    temp.file("cron.toml", "[cron.a]\ncommand = \"app:a\"\nweekdays = \"1 5\"\n");

    temp.cronline()
        .args(&["generate"])
        .fails()
        .stderr_has("invalid format for cron.a.weekdays");
}

#[test]
fn unknown_field_is_rejected() {
    let temp = Project::empty();
    temp.file("cron.toml", "[cron.a]\ncommand = \"app:a\"\nschedule = \"@daily\"\n");

    temp.cronline()
        .args(&["list"])
        .fails()
        .stderr_has("schedule");
}
