// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default values applied while loading.

use crate::parse_config;
use cronline_core::{JobDef, OutputConfig, OutputDef};

#[test]
fn empty_document_is_an_empty_config() {
    let config = parse_config("").unwrap();
    assert!(config.crons.is_empty());
    assert_eq!(config.output(), &OutputConfig::default());
}

#[test]
fn global_output_defaults_to_dev_null() {
    let config = parse_config("[cron.cron_def]\ncommand = \"app:cmd\"\n").unwrap();
    assert_eq!(config.output().file, "/dev/null");
    assert!(!config.output().append);
}

#[test]
fn partial_global_output_keeps_other_default() {
    let config = parse_config("[options.output]\nappend = true\n").unwrap();
    assert_eq!(config.output().file, "/dev/null");
    assert!(config.output().append);
}

#[test]
fn job_defaults_match_default_job() {
    let config = parse_config("[cron.cron_def]\ncommand = \"app:cmd\"\n").unwrap();
    let expected = JobDef {
        name: "cron_def".into(),
        command: Some("app:cmd".into()),
        ..JobDef::default()
    };
    assert_eq!(config.crons["cron_def"], expected);
}

#[test]
fn job_output_override_defaults_to_unset() {
    let config = parse_config("[cron.cron_def]\ncommand = \"app:cmd\"\n").unwrap();
    assert_eq!(config.crons["cron_def"].output, OutputDef::default());
}

#[test]
fn command_may_be_omitted() {
    let config = parse_config("[cron.idle]\nenabled = false\n").unwrap();
    let cron = config.get_cron("idle").unwrap();
    assert!(!cron.enabled);
    assert!(cron.command.is_none());
}

#[test]
fn crons_alias_is_accepted() {
    let config = parse_config("[crons.cron_def]\ncommand = \"app:cmd\"\n").unwrap();
    assert_eq!(config.crons["cron_def"].name, "cron_def");
}
