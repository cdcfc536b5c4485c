// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{parse_config, parse_config_with_format, ConfigError, CronConfig, Format};

mod defaults;
mod errors;
mod formats;

// ---------------------------------------------------------------------------
// Shared test helpers
// ---------------------------------------------------------------------------

/// Parse an HCL config, panicking on error.
fn parse_hcl(input: &str) -> CronConfig {
    parse_config_with_format(input, Format::Hcl).unwrap()
}

/// Parse a JSON config, panicking on error.
fn parse_json(input: &str) -> CronConfig {
    parse_config_with_format(input, Format::Json).unwrap()
}

/// Assert that a config error's display message contains all given fragments.
fn assert_err_contains(err: &ConfigError, fragments: &[&str]) {
    let msg = err.to_string();
    for frag in fragments {
        assert!(msg.contains(frag), "error should contain '{frag}': {msg}");
    }
}

/// Parse TOML and assert it fails with error containing all fragments.
fn assert_toml_err(input: &str, fragments: &[&str]) {
    assert_err_contains(&parse_config(input).unwrap_err(), fragments);
}

/// Parse HCL and assert it fails with error containing all fragments.
fn assert_hcl_err(input: &str, fragments: &[&str]) {
    assert_err_contains(
        &parse_config_with_format(input, Format::Hcl).unwrap_err(),
        fragments,
    );
}
