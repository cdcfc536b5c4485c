// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Loading cron configs from disk

use std::path::Path;

use crate::parser::{parse_config_with_format, ConfigError, CronConfig, Format};

/// Read and parse a cron config file, choosing the format by extension.
pub fn load_config(path: &Path) -> Result<CronConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path);
    let config = parse_config_with_format(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        crons = config.crons.len(),
        "loaded cron config"
    );
    Ok(config)
}
