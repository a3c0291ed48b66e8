//! Workspace description collaborator

use crate::resource::ResourceUri;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How many folders the workbench currently has open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkbenchState {
    /// No folder is open
    Empty,
    /// Exactly one folder is open
    SingleFolder,
    /// A multi-root workspace is open
    Workspace,
}

/// A root directory the session is editing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// Display name, usually the directory name
    pub name: String,
    /// Base location of the folder
    pub uri: ResourceUri,
}

impl WorkspaceFolder {
    /// Create a folder, naming it after the last segment of its location
    pub fn new(uri: impl Into<ResourceUri>) -> Self {
        let uri = uri.into();
        let name = uri.file_name().unwrap_or(uri.as_str()).to_string();
        Self { name, uri }
    }
}

/// The open folders, in workspace order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Ordered folder list
    pub folders: Vec<WorkspaceFolder>,
}

/// Read-only view of the workspace the host has open
pub trait WorkspaceContext: Send + Sync {
    /// Current workbench state
    fn workbench_state(&self) -> WorkbenchState;

    /// Current workspace folders
    fn workspace(&self) -> Workspace;
}

/// A fixed workspace description, built once by the host
#[derive(Debug, Clone, Default)]
pub struct StaticWorkspace {
    workspace: Workspace,
}

impl StaticWorkspace {
    /// Build from folder locations, keeping their order
    pub fn new<I, U>(folders: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<ResourceUri>,
    {
        Self {
            workspace: Workspace {
                folders: folders.into_iter().map(WorkspaceFolder::new).collect(),
            },
        }
    }

    /// Build from local directories
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self::new(paths.into_iter().map(ResourceUri::from_path))
    }

    /// A workspace with no folders open
    pub fn empty() -> Self {
        Self::default()
    }
}

impl WorkspaceContext for StaticWorkspace {
    fn workbench_state(&self) -> WorkbenchState {
        match self.workspace.folders.len() {
            0 => WorkbenchState::Empty,
            1 => WorkbenchState::SingleFolder,
            _ => WorkbenchState::Workspace,
        }
    }

    fn workspace(&self) -> Workspace {
        self.workspace.clone()
    }
}
