//! Instructions discovery configuration

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Relative path, under each workspace folder, searched for instruction documents.
pub const DEFAULT_INSTRUCTIONS_SUBPATH: &str = ".copilot/instructions";

/// File-name suffix an entry must carry to count as an instruction document.
pub const DEFAULT_INSTRUCTIONS_EXTENSION: &str = ".md";

/// Configuration for instruction document discovery and reference resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionsConfig {
    /// Directory joined onto every workspace folder to form a candidate location.
    ///
    /// Default: ".copilot/instructions"
    #[serde(default = "default_subpath")]
    pub subpath: String,

    /// Case-sensitive file-name suffix that qualifies a document.
    ///
    /// Default: ".md"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Follow relative Markdown links inside an attached document.
    #[serde(default = "default_follow_references")]
    pub follow_references: bool,

    /// How many link hops to follow from the primary document.
    #[serde(default = "default_max_reference_depth")]
    pub max_reference_depth: usize,
}

fn default_subpath() -> String {
    DEFAULT_INSTRUCTIONS_SUBPATH.to_string()
}

fn default_extension() -> String {
    DEFAULT_INSTRUCTIONS_EXTENSION.to_string()
}

fn default_follow_references() -> bool {
    true
}

fn default_max_reference_depth() -> usize {
    8
}

impl Default for InstructionsConfig {
    fn default() -> Self {
        Self {
            subpath: default_subpath(),
            extension: default_extension(),
            follow_references: default_follow_references(),
            max_reference_depth: default_max_reference_depth(),
        }
    }
}

impl InstructionsConfig {
    /// Check that the configured subpath and extension are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let subpath = self.subpath.trim_matches('/');
        if subpath.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "instructions.subpath".to_string(),
                value: "must not be empty".to_string(),
            });
        }
        if self.subpath.starts_with('/') || subpath.split('/').any(|seg| seg == "..") {
            return Err(ConfigError::InvalidValue {
                field: "instructions.subpath".to_string(),
                value: format!("'{}' must be relative to the workspace folder", self.subpath),
            });
        }
        if self.extension.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "instructions.extension".to_string(),
                value: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_constants() {
        let config = InstructionsConfig::default();
        assert_eq!(config.subpath, ".copilot/instructions");
        assert_eq!(config.extension, ".md");
        assert!(config.follow_references);
        assert_eq!(config.max_reference_depth, 8);
    }

    #[test]
    fn test_deserialize_custom_subpath() {
        let toml = r#"
            subpath = ".github/instructions"
        "#;
        let config: InstructionsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.subpath, ".github/instructions");
        assert_eq!(config.extension, ".md");
    }

    #[test]
    fn test_deserialize_with_default() {
        let config: InstructionsConfig = toml::from_str("").unwrap();
        assert_eq!(config, InstructionsConfig::default());
    }

    #[test]
    fn test_validate_rejects_absolute_subpath() {
        let config = InstructionsConfig {
            subpath: "/etc/instructions".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_parent_traversal() {
        let config = InstructionsConfig {
            subpath: "../shared/instructions".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let config = InstructionsConfig {
            extension: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(InstructionsConfig::default().validate().is_ok());
    }
}
