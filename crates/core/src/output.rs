// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Global output redirection defaults

use serde::{Deserialize, Serialize};

/// Output target used by every job that doesn't set its own `output.file`.
pub const DEFAULT_OUTPUT_FILE: &str = "/dev/null";

/// Process-wide output redirection for rendered cron entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_file")]
    pub file: String,
    #[serde(default)]
    pub append: bool,
}

fn default_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            append: false,
        }
    }
}

impl OutputConfig {
    pub fn to_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }
}
