//! Subcommand implementations

pub mod inspect;
pub mod list;

use quire_core::{ResourceUri, StaticWorkspace};
use crate::config::CliConfig;

fn workspace_for(config: &CliConfig) -> StaticWorkspace {
    StaticWorkspace::new(config.folders.iter().map(ResourceUri::from_path))
}
