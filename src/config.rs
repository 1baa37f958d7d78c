// src/config.rs
use std::{env, path::PathBuf};

/// Enables per-row checking of numeric columns.
pub const STRICT_ENV: &str = "CSV2H_STRICT";
/// Where to write the inferred columns as JSON.
pub const SCHEMA_JSON_ENV: &str = "CSV2H_SCHEMA_JSON";

/// Run-time switches that sit outside the positional CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Reject numeric cells beyond the first data row that don't parse as
    /// their column's type. Off by default: such cells are emitted verbatim.
    pub strict: bool,
    /// Optional JSON schema sidecar path.
    pub schema_json: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key → value lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict = lookup(STRICT_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        let schema_json = lookup(SCHEMA_JSON_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self {
            strict,
            schema_json,
        }
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
