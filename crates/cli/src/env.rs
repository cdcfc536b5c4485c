// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Project root interpolated into `cd <root>`, when `--root-dir` is absent.
pub fn root_dir() -> Option<String> {
    non_empty("CRONLINE_ROOT_DIR")
}

/// Console environment passed as `--env=<env>`, when `--env` is absent.
pub fn environment() -> Option<String> {
    non_empty("CRONLINE_ENV")
}

/// Tracing filter directives (e.g. `debug`, `cronline_config=trace`).
pub fn log_filter() -> Option<String> {
    non_empty("CRONLINE_LOG")
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}
