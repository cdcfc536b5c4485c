// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronline list` — show configured crons.

use anyhow::Result;
use clap::Args;
use cronline_core::{JobDef, OutputConfig};
use serde::Serialize;
use std::path::PathBuf;

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct ListArgs {
    /// Cron config file (TOML, HCL, or JSON)
    #[arg(short, long, default_value = super::DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// One row of `cronline list`.
#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct CronSummary {
    pub name: String,
    pub schedule: String,
    pub enabled: bool,
    pub command: Option<String>,
    pub output: String,
}

impl CronSummary {
    pub(crate) fn new(name: &str, cron: &JobDef, output: &OutputConfig) -> Self {
        Self {
            name: name.to_string(),
            schedule: cron.schedule(),
            enabled: cron.enabled,
            command: cron.command_line(),
            output: cron.output_file(output).to_string(),
        }
    }
}

pub fn handle(args: ListArgs, format: OutputFormat) -> Result<()> {
    let config = cronline_config::load_config(&args.config)?;
    let summaries: Vec<CronSummary> = config
        .crons
        .iter()
        .map(|(name, cron)| CronSummary::new(name, cron, config.output()))
        .collect();

    match format {
        OutputFormat::Text => {
            if summaries.is_empty() {
                eprintln!("No crons defined in {}", args.config.display());
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column::left("NAME"),
                Column::left("SCHEDULE"),
                Column::left("STATUS"),
                Column::left("OUTPUT"),
                Column::left("COMMAND").with_max(60),
            ]);
            for s in summaries {
                let status = if s.enabled { "enabled" } else { "disabled" };
                table.row(vec![
                    s.name,
                    s.schedule,
                    status.to_string(),
                    s.output,
                    s.command.unwrap_or_else(|| "-".to_string()),
                ]);
            }
            table.render(&mut std::io::stdout().lock())?;
        }
        OutputFormat::Json => print_json(&summaries)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
