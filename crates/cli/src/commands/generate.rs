// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cronline generate` — render crontab entries.

use anyhow::{bail, Result};
use clap::Args;
use cronline_core::{CronEntryGenerator, JobDef};
use indexmap::IndexMap;
use std::path::PathBuf;

use crate::env;
use crate::output::{print_json, OutputFormat};

/// Console environment used when neither `--env` nor `CRONLINE_ENV` is set.
pub const DEFAULT_ENVIRONMENT: &str = "prod";

#[derive(Args)]
pub struct GenerateArgs {
    /// Cron config file (TOML, HCL, or JSON)
    #[arg(short, long, default_value = super::DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Project root the entries `cd` into [env: CRONLINE_ROOT_DIR]
    #[arg(long = "root-dir")]
    pub root_dir: Option<String>,

    /// Console environment passed as --env [env: CRONLINE_ENV]
    #[arg(long = "env")]
    pub environment: Option<String>,

    /// Only render these crons
    pub names: Vec<String>,
}

pub fn handle(args: GenerateArgs, format: OutputFormat) -> Result<()> {
    let config = cronline_config::load_config(&args.config)?;
    let root_dir = resolve_root_dir(args.root_dir);
    let environment = resolve_environment(args.environment);

    let crons = select_crons(&config.crons, &args.names)?;
    let generator = CronEntryGenerator::new(&crons, config.output(), &root_dir, &environment);
    let entries = generator.generate_entries()?;

    tracing::debug!(
        rendered = entries.len(),
        skipped = crons.len() - entries.len(),
        root_dir = %root_dir,
        environment = %environment,
        "generated crontab entries"
    );

    match format {
        OutputFormat::Text => {
            for line in entries.values() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => print_json(&entries)?,
    }
    Ok(())
}

/// Restrict `crons` to `names`, keeping config order. No names selects all.
pub(crate) fn select_crons(
    crons: &IndexMap<String, JobDef>,
    names: &[String],
) -> Result<IndexMap<String, JobDef>> {
    if names.is_empty() {
        return Ok(crons.clone());
    }
    for name in names {
        match crons.get(name) {
            None => bail!("unknown cron: {}", name),
            Some(cron) if !cron.enabled => {
                tracing::warn!(cron = %name, "cron is disabled, no entry rendered")
            }
            Some(_) => {}
        }
    }
    Ok(crons
        .iter()
        .filter(|(name, _)| names.contains(name))
        .map(|(name, cron)| (name.clone(), cron.clone()))
        .collect())
}

/// `--root-dir` > CRONLINE_ROOT_DIR > current directory
pub(crate) fn resolve_root_dir(flag: Option<String>) -> String {
    flag.or_else(env::root_dir).unwrap_or_else(|| {
        std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| ".".to_string())
    })
}

/// `--env` > CRONLINE_ENV > `prod`
pub(crate) fn resolve_environment(flag: Option<String>) -> String {
    flag.or_else(env::environment)
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
