//! Configuration utility functions
//!
//! Helpers for reading override values from an environment-style lookup.
//! Every helper falls back to the default when the key is missing or the
//! value does not parse.

use std::path::PathBuf;

/// Get a path value from the lookup or use the default
pub fn get_env_path<F>(lookup: &F, key: &str, default: PathBuf) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
        .unwrap_or(default)
}

/// Get a boolean value from the lookup or use the default
pub fn get_env_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val.eq_ignore_ascii_case("true") || val == "1",
        None => default,
    }
}

/// Get a usize value from the lookup or use the default
pub fn get_env_usize<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val.trim().parse().unwrap_or(default),
        None => default,
    }
}

/// Parse a comma-separated list from the lookup, skipping empty entries
pub fn get_env_list<F>(lookup: &F, key: &str, default: Vec<String>) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        None => default,
    }
}
