// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crontab entry rendering
//!
//! Turns job definitions into single crontab rows of the form
//!
//! ```text
//! <minutes> <hours> <days> <months> <weekdays> cd <root>; php console --env=<env> <command> [<arg> ...] 2>&1 1><file>
//! ```

use indexmap::IndexMap;
use thiserror::Error;

use crate::{JobDef, OutputConfig};

/// Errors that can occur while generating crontab entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("missing command for enabled cron '{name}'")]
    MissingCommand { name: String },
}

/// Renders crontab entries for a set of job definitions.
///
/// Holds borrowed inputs only, so one generator can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct CronEntryGenerator<'a> {
    definitions: &'a IndexMap<String, JobDef>,
    output: &'a OutputConfig,
    root_dir: &'a str,
    environment: &'a str,
}

impl<'a> CronEntryGenerator<'a> {
    pub fn new(
        definitions: &'a IndexMap<String, JobDef>,
        output: &'a OutputConfig,
        root_dir: &'a str,
        environment: &'a str,
    ) -> Self {
        Self {
            definitions,
            output,
            root_dir,
            environment,
        }
    }

    /// Render every enabled definition, keyed by cron name in input order.
    pub fn generate_entries(&self) -> Result<IndexMap<String, String>, GenerateError> {
        generate_entries(self.definitions, self.output, self.root_dir, self.environment)
    }
}

/// Render every enabled definition, keyed by cron name in input order.
///
/// Disabled definitions are skipped. The first enabled definition without
/// a command fails the whole call.
pub fn generate_entries(
    definitions: &IndexMap<String, JobDef>,
    output: &OutputConfig,
    root_dir: &str,
    environment: &str,
) -> Result<IndexMap<String, String>, GenerateError> {
    let mut entries = IndexMap::with_capacity(definitions.len());
    for (name, def) in definitions {
        if !def.enabled {
            continue;
        }
        let line = render_entry(name, def, output, root_dir, environment)?;
        entries.insert(name.clone(), line);
    }
    Ok(entries)
}

/// Render a single definition, regardless of its `enabled` flag.
pub fn render_entry(
    name: &str,
    def: &JobDef,
    output: &OutputConfig,
    root_dir: &str,
    environment: &str,
) -> Result<String, GenerateError> {
    let command = def
        .command_line()
        .ok_or_else(|| GenerateError::MissingCommand {
            name: name.to_string(),
        })?;
    let output_file = def.output_file(output);

    Ok(format!(
        "{} cd {}; php console --env={} {} 2>&1 1>{}",
        def.schedule(),
        root_dir,
        environment,
        command,
        output_file
    ))
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
