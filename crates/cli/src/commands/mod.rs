// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod generate;
pub mod list;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "cron.toml";
