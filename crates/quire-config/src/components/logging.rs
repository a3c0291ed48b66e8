//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging settings consumed by the host binary when it installs a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level for quire crates ("error", "warn", "info", "debug", "trace").
    #[serde(default = "default_level")]
    pub level: String,

    /// Extra `EnvFilter` directives appended after the crate defaults.
    #[serde(default)]
    pub directives: Vec<String>,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directives: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Build an `EnvFilter`-compatible directive string.
    ///
    /// `level_override` wins over the configured level (used for `--verbose`).
    pub fn filter_directives(&self, level_override: Option<&str>) -> String {
        let level = level_override.unwrap_or(&self.level);
        let mut parts = vec![
            format!("quire_cli={}", level),
            format!("quire_core={}", level),
            format!("quire_config={}", level),
        ];
        parts.extend(self.directives.iter().cloned());
        parts.join(",")
    }
}
