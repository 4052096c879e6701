//! Environment lookups used by service `Config::from_env` constructors.
//!
//! Required values panic at startup with the variable name, so a misconfigured
//! deployment fails fast instead of serving requests.

/// Read a required env var.
///
/// # Panics
///
/// Panics if the variable is missing or not valid UTF-8.
pub fn required(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

/// Read an optional env var. Blank values count as absent.
pub fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Read and parse an env var, falling back to `default` when absent or unparsable.
pub fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    optional(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Split a comma-separated list, dropping blank entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
