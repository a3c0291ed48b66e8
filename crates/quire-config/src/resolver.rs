//! Configuration resolution and merging
//!
//! Implements a three-tier configuration hierarchy:
//! 1. System defaults (hardcoded)
//! 2. Global config (`~/.config/quire/config.toml`)
//! 3. Workspace config (`.quire/config.toml`)
//!
//! Later tiers override individual keys of earlier tiers; tables are merged
//! recursively rather than replaced wholesale.

use crate::{ConfigError, ConfigResult, QuireConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory (inside a workspace root) that holds workspace configuration.
pub const WORKSPACE_CONFIG_DIR: &str = ".quire";

/// File name used for both global and workspace configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves configuration from multiple tiers
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config: QuireConfig,
    sources: Vec<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for a workspace root using the user's global config.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quire_config::ConfigResolver;
    ///
    /// let resolver = ConfigResolver::for_workspace("/path/to/workspace")?;
    /// println!("{}", resolver.config().instructions.subpath);
    /// # Ok::<(), quire_config::ConfigError>(())
    /// ```
    pub fn for_workspace(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::with_global_path(global_config_path(), path)
    }

    /// Create a resolver with an explicit global config location.
    ///
    /// `None` skips the global tier entirely.
    pub fn with_global_path(
        global: Option<PathBuf>,
        workspace_root: impl AsRef<Path>,
    ) -> ConfigResult<Self> {
        let workspace_path = workspace_root
            .as_ref()
            .join(WORKSPACE_CONFIG_DIR)
            .join(CONFIG_FILE_NAME);

        let mut merged = toml::Table::new();
        let mut sources = Vec::new();

        for path in global.into_iter().chain(std::iter::once(workspace_path)) {
            if let Some(table) = read_table(&path)? {
                debug!("Merging config tier {}", path.display());
                merge_tables(&mut merged, table);
                sources.push(path);
            }
        }

        let config: QuireConfig =
            toml::Value::Table(merged)
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::InvalidValue {
                    field: "merged config".to_string(),
                    value: e.to_string(),
                })?;
        config.validate()?;

        Ok(Self { config, sources })
    }

    /// The merged configuration
    pub fn config(&self) -> &QuireConfig {
        &self.config
    }

    /// Files that contributed to the merged configuration, lowest tier first
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Consume the resolver, returning the merged configuration
    pub fn into_config(self) -> QuireConfig {
        self.config
    }
}

/// Location of the global config file, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quire").join(CONFIG_FILE_NAME))
}

fn read_table(path: &Path) -> ConfigResult<Option<toml::Table>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = contents
        .parse::<toml::Table>()
        .map_err(|e| ConfigError::InvalidValue {
            field: format!("config at {}", path.display()),
            value: format!("Failed to parse: {}", e),
        })?;

    Ok(Some(table))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_workspace(config_toml: Option<&str>) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let quire_dir = temp_dir.path().join(WORKSPACE_CONFIG_DIR);
        fs::create_dir(&quire_dir).expect("Failed to create .quire dir");

        if let Some(toml) = config_toml {
            fs::write(quire_dir.join(CONFIG_FILE_NAME), toml).expect("Failed to write file");
        }

        temp_dir
    }

    #[test]
    fn resolver_uses_defaults_without_files() {
        let temp_dir = create_test_workspace(None);
        let resolver =
            ConfigResolver::with_global_path(None, temp_dir.path()).expect("resolver");

        assert_eq!(resolver.config(), &QuireConfig::default());
        assert!(resolver.sources().is_empty());
    }

    #[test]
    fn resolver_loads_workspace_config() {
        let temp_dir = create_test_workspace(Some(
            r#"
[instructions]
subpath = ".github/instructions"
"#,
        ));
        let resolver =
            ConfigResolver::with_global_path(None, temp_dir.path()).expect("resolver");

        assert_eq!(resolver.config().instructions.subpath, ".github/instructions");
        assert_eq!(resolver.sources().len(), 1);
    }

    #[test]
    fn workspace_overrides_individual_global_keys() {
        let global_dir = TempDir::new().unwrap();
        let global_path = global_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &global_path,
            r#"
[instructions]
extension = ".prompt.md"
max_reference_depth = 3

[logging]
level = "info"
"#,
        )
        .unwrap();

        let workspace = create_test_workspace(Some(
            r#"
[instructions]
max_reference_depth = 1
"#,
        ));

        let resolver =
            ConfigResolver::with_global_path(Some(global_path), workspace.path()).unwrap();
        let config = resolver.config();

        assert_eq!(config.instructions.extension, ".prompt.md");
        assert_eq!(config.instructions.max_reference_depth, 1);
        assert_eq!(config.logging.level, "info");
        assert_eq!(resolver.sources().len(), 2);
    }

    #[test]
    fn missing_global_file_is_skipped() {
        let workspace = create_test_workspace(None);
        let absent = workspace.path().join("nowhere").join(CONFIG_FILE_NAME);
        let resolver = ConfigResolver::with_global_path(Some(absent), workspace.path()).unwrap();
        assert!(resolver.sources().is_empty());
    }

    #[test]
    fn resolver_fails_on_invalid_workspace_toml() {
        let workspace = create_test_workspace(Some("this is not valid toml {[}"));
        let result = ConfigResolver::with_global_path(None, workspace.path());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn resolver_validates_merged_result() {
        let workspace = create_test_workspace(Some("[instructions]\nsubpath = \"/abs\"\n"));
        let result = ConfigResolver::with_global_path(None, workspace.path());
        assert!(result.is_err());
    }
}
