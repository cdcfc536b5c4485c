// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation helpers for cron config parsing

use crate::parser::ConfigError;
use cronline_core::{JobDef, SCHEDULE_FIELD_NAMES};

fn invalid(location: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidFormat {
        location: location.into(),
        message: message.into(),
    }
}

/// Validate the structure of one cron definition.
///
/// Disabled crons are never rendered, so their fields are not checked. A
/// missing command is not checked here either: entry generation reports it
/// for enabled crons.
pub(crate) fn validate_job(name: &str, cron: &JobDef) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(invalid("cron", "cron name must not be empty"));
    }
    if !cron.enabled {
        return Ok(());
    }

    for (field, value) in SCHEDULE_FIELD_NAMES.iter().zip(cron.schedule_fields()) {
        validate_schedule_field(value, &format!("cron.{}.{}", name, field))?;
    }

    if let Some(ref command) = cron.command {
        validate_line_safe(command, &format!("cron.{}.command", name))?;
    }

    for (i, arg) in cron.arguments.iter().enumerate() {
        validate_line_safe(arg, &format!("cron.{}.arguments[{}]", name, i))?;
    }

    if let Some(ref file) = cron.output.file {
        validate_line_safe(file, &format!("cron.{}.output.file", name))?;
    }

    Ok(())
}

/// A schedule field occupies exactly one crontab column.
pub(crate) fn validate_schedule_field(value: &str, location: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(invalid(location, "schedule field must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(
            location,
            format!("schedule field '{}' must not contain whitespace", value),
        ));
    }
    Ok(())
}

/// Reject values that would split a crontab entry across rows.
pub(crate) fn validate_line_safe(value: &str, location: &str) -> Result<(), ConfigError> {
    if value.contains(['\n', '\r']) {
        return Err(invalid(location, "value must not contain line breaks"));
    }
    Ok(())
}
