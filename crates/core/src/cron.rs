// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron job definitions

use serde::{Deserialize, Serialize};

use crate::OutputConfig;

/// Wildcard used for every schedule field that isn't configured.
pub const ANY: &str = "*";

fn any() -> String {
    ANY.to_string()
}

fn enabled_by_default() -> bool {
    true
}

/// Per-job output redirection override.
///
/// Both fields stay `None` unless the definition sets them; the global
/// [`OutputConfig`](crate::OutputConfig) fills in the file at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputDef {
    #[serde(default)]
    pub file: Option<String>,
    /// Accepted for compatibility; the rendered redirection is always `1>`.
    #[serde(default)]
    pub append: Option<bool>,
}

/// A named cron job: schedule, console command, and output target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobDef {
    /// Cron name (injected from map key)
    #[serde(skip)]
    pub name: String,
    #[serde(default = "any")]
    pub minutes: String,
    #[serde(default = "any")]
    pub hours: String,
    #[serde(default = "any")]
    pub days: String,
    #[serde(default = "any")]
    pub months: String,
    #[serde(default = "any")]
    pub weekdays: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Console command name, e.g. `app:cleanup`. Required when enabled.
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub output: OutputDef,
}

impl Default for JobDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            minutes: any(),
            hours: any(),
            days: any(),
            months: any(),
            weekdays: any(),
            enabled: enabled_by_default(),
            command: None,
            arguments: Vec::new(),
            output: OutputDef::default(),
        }
    }
}

impl JobDef {
    /// A default definition running `command`, every minute.
    pub fn with_command(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: Some(command.into()),
            ..Self::default()
        }
    }

    /// The five schedule fields, space-separated, in crontab column order.
    pub fn schedule(&self) -> String {
        self.schedule_fields().join(" ")
    }

    /// Schedule fields in crontab column order (see [`SCHEDULE_FIELD_NAMES`]).
    pub fn schedule_fields(&self) -> [&str; 5] {
        [
            self.minutes.as_str(),
            self.hours.as_str(),
            self.days.as_str(),
            self.months.as_str(),
            self.weekdays.as_str(),
        ]
    }

    /// The command followed by its arguments, or `None` if no usable
    /// command is set.
    ///
    /// Arguments are joined verbatim. Nothing is quoted, so definitions
    /// from untrusted sources can inject shell syntax.
    pub fn command_line(&self) -> Option<String> {
        let command = self.command.as_deref().filter(|c| !c.is_empty())?;
        let mut line = command.to_string();
        for arg in &self.arguments {
            line.push(' ');
            line.push_str(arg);
        }
        Some(line)
    }

    /// Where the job's output goes: its own `output.file`, else the global one.
    pub fn output_file<'a>(&'a self, global: &'a OutputConfig) -> &'a str {
        self.output.file.as_deref().unwrap_or(&global.file)
    }
}

/// Names of the schedule fields, matching [`JobDef::schedule_fields`].
pub const SCHEDULE_FIELD_NAMES: [&str; 5] = ["minutes", "hours", "days", "months", "weekdays"];

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
