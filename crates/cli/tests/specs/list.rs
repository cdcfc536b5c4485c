// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronline list` specs

use crate::prelude::*;

#[test]
fn list_shows_every_cron() {
    let temp = Project::empty();
    temp.file(
        "cron.toml",
        r#"
[cron.cleanup]
command = "app:cleanup"
minutes = "*/5"
arguments = ["--force"]

[cron.idle]
enabled = false
"#,
    );

    temp.cronline().args(&["list"]).passes().stdout_eq(concat!(
        "NAME     SCHEDULE     STATUS    OUTPUT     COMMAND\n",
        "cleanup  */5 * * * *  enabled   /dev/null  app:cleanup --force\n",
        "idle     * * * * *    disabled  /dev/null  -\n",
    ));
}

#[test]
fn list_json() {
    let temp = Project::empty();
    temp.file("cron.toml", MINIMAL_CONFIG);

    let run = temp.cronline().args(&["list", "-o", "json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "cron_def",
            "schedule": "* * * * *",
            "enabled": true,
            "command": "app:test:command",
            "output": "/dev/null",
        }])
    );
}

#[test]
fn list_empty_config() {
    let temp = Project::empty();
    temp.file("cron.toml", "");

    temp.cronline()
        .args(&["list"])
        .passes()
        .stdout_eq("")
        .stderr_has("No crons defined in cron.toml");
}
