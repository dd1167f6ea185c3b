// src/config.rs

use lazy_static::lazy_static;
use std::time::Duration;
use tracing::warn;

lazy_static! {
    pub static ref WORKERS_ENV: String = format!("{}_WORKERS", crate::logging::PROJECT_NAME.clone());
    pub static ref TIMEOUT_ENV: String = format!("{}_TIMEOUT_MS", crate::logging::PROJECT_NAME.clone());
}

pub const DEFAULT_WORKERS: usize = 200;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// Tuning knobs for the port scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Number of concurrent connect workers.
    pub workers: usize,
    /// Upper bound on a single connect attempt.
    pub connect_timeout: Duration,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ScannerConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Defaults overridden by the `<PROJECT>_WORKERS` and `<PROJECT>_TIMEOUT_MS` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(WORKERS_ENV.as_str()) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.workers = n,
                _ => warn!(variable = WORKERS_ENV.as_str(), value = %raw, "Ignoring invalid worker count."),
            }
        }
        if let Some(raw) = lookup(TIMEOUT_ENV.as_str()) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.connect_timeout = Duration::from_millis(ms),
                _ => warn!(variable = TIMEOUT_ENV.as_str(), value = %raw, "Ignoring invalid connect timeout."),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = ScannerConfig::default();
        assert_eq!(config.workers, 200);
        assert_eq!(config.connect_timeout, Duration::from_millis(500));
    }

    #[test]
    fn env_names_follow_crate_name() {
        assert_eq!(*WORKERS_ENV, "SURFACE_MAPPER_WORKERS");
        assert_eq!(*TIMEOUT_ENV, "SURFACE_MAPPER_TIMEOUT_MS");
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            ("SURFACE_MAPPER_WORKERS", "64"),
            ("SURFACE_MAPPER_TIMEOUT_MS", "1500"),
        ]));
        assert_eq!(config.workers, 64);
        assert_eq!(config.connect_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            ("SURFACE_MAPPER_WORKERS", "0"),
            ("SURFACE_MAPPER_TIMEOUT_MS", "soon"),
        ]));
        assert_eq!(config, ScannerConfig::default());
    }

    #[test]
    fn builder_never_allows_zero_workers() {
        assert_eq!(ScannerConfig::default().with_workers(0).workers, 1);
    }
}
