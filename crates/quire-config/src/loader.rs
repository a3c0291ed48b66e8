//! Loading configuration from explicit files

use crate::{ConfigError, ConfigResult, QuireConfig};
use std::path::Path;
use tracing::debug;

/// Loads a [`QuireConfig`] from TOML sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and parse a TOML configuration file.
    ///
    /// The result is validated before it is returned.
    pub async fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<QuireConfig> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded config file {}", path.display());
        Self::load_from_str(&contents).map_err(|e| match e {
            ConfigError::InvalidValue { field, value } if field == "config" => {
                ConfigError::InvalidValue {
                    field: format!("config at {}", path.display()),
                    value,
                }
            }
            other => other,
        })
    }

    /// Parse a TOML configuration document.
    pub fn load_from_str(contents: &str) -> ConfigResult<QuireConfig> {
        let config: QuireConfig = toml::from_str(contents).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            value: format!("Failed to parse: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quire.toml");
        std::fs::write(&path, "[instructions]\nsubpath = \"notes/rules\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).await.unwrap();
        assert_eq!(config.instructions.subpath, "notes/rules");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = ConfigLoader::load_from_file(temp.path().join("absent.toml")).await;
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[tokio::test]
    async fn test_parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "this is not valid toml {[}").unwrap();

        let err = ConfigLoader::load_from_file(&path).await.unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert!(field.contains("broken.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = ConfigLoader::load_from_str("[instructions]\nextension = \"\"\n");
        assert!(result.is_err());
    }
}
