// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Cron config loading and validation

mod load;
mod parser;
mod validate;

pub use load::load_config;
pub use parser::{parse_config, parse_config_with_format, ConfigError, CronConfig, Format, Options};
