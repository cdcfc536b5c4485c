// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cronline-core: cron job definitions and crontab entry rendering

pub mod cron;
pub mod generator;
pub mod output;

pub use cron::{JobDef, OutputDef, ANY, SCHEDULE_FIELD_NAMES};
pub use generator::{generate_entries, render_entry, CronEntryGenerator, GenerateError};
pub use output::{OutputConfig, DEFAULT_OUTPUT_FILE};
