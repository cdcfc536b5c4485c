// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron config parsing (TOML, HCL, and JSON)

use crate::validate::{validate_job, validate_line_safe};
use cronline_core::{JobDef, OutputConfig};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

impl Format {
    /// Pick a format from a file extension; anything unrecognized is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("hcl") => Format::Hcl,
            Some("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Errors that can occur while loading a cron config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },

    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Global options shared by every cron in the file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
    #[serde(default)]
    pub output: OutputConfig,
}

/// A parsed cron config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CronConfig {
    #[serde(default)]
    pub options: Options,
    #[serde(default, alias = "cron")]
    pub crons: IndexMap<String, JobDef>,
}

impl CronConfig {
    /// Get a cron definition by name
    pub fn get_cron(&self, name: &str) -> Option<&JobDef> {
        self.crons.get(name)
    }

    /// Global output defaults
    pub fn output(&self) -> &OutputConfig {
        &self.options.output
    }
}

/// Parse a cron config from TOML content (convenience wrapper)
pub fn parse_config(content: &str) -> Result<CronConfig, ConfigError> {
    parse_config_with_format(content, Format::Toml)
}

/// Parse a cron config from the given content in the specified format
pub fn parse_config_with_format(content: &str, format: Format) -> Result<CronConfig, ConfigError> {
    // 1. Serde does the heavy lifting, defaults included
    let mut config: CronConfig = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    // 2. Name fixup — inject map keys into .name fields
    for (name, cron) in &mut config.crons {
        cron.name = name.clone();
    }

    // 3. Validation — every field must fit on one crontab row
    validate_line_safe(&config.options.output.file, "options.output.file")?;
    for (name, cron) in &config.crons {
        validate_job(name, cron)?;
    }

    Ok(config)
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
