//! CLI configuration: resolved config plus the workspace folders to operate on

use anyhow::{Context, Result};
use quire_config::{ConfigLoader, ConfigResolver, QuireConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a command needs to run
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Merged quire configuration
    pub quire: QuireConfig,
    /// Absolute workspace folders, in the order given
    pub folders: Vec<PathBuf>,
    /// Config files that contributed, lowest precedence first
    pub sources: Vec<PathBuf>,
}

impl CliConfig {
    /// Load configuration and normalize folders.
    ///
    /// With an explicit `config_path` only that file is read. Otherwise the
    /// global and workspace tiers are resolved against the first folder.
    pub async fn load(config_path: Option<PathBuf>, folders: Vec<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let folders = normalize_folders(&cwd, folders);

        let (quire, sources) = match config_path {
            Some(path) => {
                let quire = ConfigLoader::load_from_file(&path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                (quire, vec![path])
            }
            None => {
                let root = folders.first().map(PathBuf::as_path).unwrap_or(cwd.as_path());
                let resolver = ConfigResolver::for_workspace(root)
                    .with_context(|| format!("Failed to resolve config for {}", root.display()))?;
                let sources = resolver.sources().to_vec();
                (resolver.into_config(), sources)
            }
        };

        Ok(Self {
            quire,
            folders,
            sources,
        })
    }

    /// Report where configuration came from.
    ///
    /// Loading runs before the subscriber exists, so this is called once
    /// logging is initialized.
    pub fn log_sources(&self) {
        debug!(sources = ?self.sources, folders = ?self.folders, "Resolved configuration");
    }
}

fn normalize_folders(cwd: &Path, folders: Vec<PathBuf>) -> Vec<PathBuf> {
    if folders.is_empty() {
        return vec![cwd.to_path_buf()];
    }

    folders
        .into_iter()
        .map(|folder| {
            if folder.is_absolute() {
                folder
            } else {
                cwd.join(folder)
            }
        })
        .collect()
}
