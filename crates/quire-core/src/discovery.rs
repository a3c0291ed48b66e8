//! Instruction document discovery
//!
//! For every open workspace folder, the candidate location is
//! `folder / subpath` (`.copilot/instructions` by default). All candidates are
//! resolved in one batched [`FileService::resolve_all`] request and their
//! direct children are filtered down to non-directory entries whose name ends
//! with the configured extension (`.md` by default, case-sensitive).
//!
//! Nothing is cached: every call recomputes the candidates and hits storage.

use crate::resource::ResourceUri;
use crate::storage::{FileService, FileStat, ResolveRequest};
use crate::workspace::{WorkbenchState, WorkspaceContext};
use quire_config::{InstructionsConfig, DEFAULT_INSTRUCTIONS_EXTENSION, DEFAULT_INSTRUCTIONS_SUBPATH};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a discovery pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Qualifying documents, in folder order then listing order
    pub documents: Vec<ResourceUri>,
    /// Candidate locations the storage collaborator failed to resolve
    pub unresolved: Vec<ResourceUri>,
}

/// Finds instruction documents in the open workspace folders
pub struct InstructionsDiscovery {
    workspace: Arc<dyn WorkspaceContext>,
    files: Arc<dyn FileService>,
    subpath: String,
    extension: String,
}

impl InstructionsDiscovery {
    /// Create a resolver using the built-in subpath and extension
    pub fn new(workspace: Arc<dyn WorkspaceContext>, files: Arc<dyn FileService>) -> Self {
        Self {
            workspace,
            files,
            subpath: DEFAULT_INSTRUCTIONS_SUBPATH.to_string(),
            extension: DEFAULT_INSTRUCTIONS_EXTENSION.to_string(),
        }
    }

    /// Create a resolver using configured subpath and extension
    pub fn with_config(
        workspace: Arc<dyn WorkspaceContext>,
        files: Arc<dyn FileService>,
        config: &InstructionsConfig,
    ) -> Self {
        Self {
            workspace,
            files,
            subpath: config.subpath.clone(),
            extension: config.extension.clone(),
        }
    }

    /// Candidate directories, one per open folder in workspace order.
    ///
    /// Empty when the workbench has no folder open.
    pub fn candidate_locations(&self) -> Vec<ResourceUri> {
        if self.workspace.workbench_state() == WorkbenchState::Empty {
            return Vec::new();
        }

        self.workspace
            .workspace()
            .folders
            .iter()
            .map(|folder| folder.uri.join(&self.subpath))
            .collect()
    }

    /// List every qualifying instruction document.
    ///
    /// Locations that fail to resolve, are not directories, or have no
    /// listing contribute nothing; no error reaches the caller.
    pub async fn list_instruction_documents(&self) -> Vec<ResourceUri> {
        self.discover().await.documents
    }

    /// Discover documents and report which candidate locations failed to resolve.
    pub async fn discover(&self) -> DiscoveryReport {
        let locations = self.candidate_locations();
        if locations.is_empty() {
            trace!("No workspace folders open, skipping discovery");
            return DiscoveryReport::default();
        }

        let requests = locations
            .into_iter()
            .map(ResolveRequest::with_children)
            .collect::<Vec<_>>();
        debug!(locations = requests.len(), "Resolving instruction locations");

        let mut report = DiscoveryReport::default();
        for result in self.files.resolve_all(requests).await {
            if !result.success {
                debug!("Instruction location unavailable: {}", result.resource);
                report.unresolved.push(result.resource);
                continue;
            }

            let Some(children) = result.stat.and_then(|stat| stat.children) else {
                trace!("No listing for {}", result.resource);
                continue;
            };

            report.documents.extend(
                children
                    .into_iter()
                    .filter(|child| is_instruction_document(child, &self.extension))
                    .map(|child| child.resource),
            );
        }

        debug!(
            found = report.documents.len(),
            unresolved = report.unresolved.len(),
            "Instruction discovery finished"
        );
        report
    }
}

/// Whether a listed entry qualifies as an instruction document.
///
/// A bare `.md` name qualifies; only the suffix is checked.
pub fn is_instruction_document(entry: &FileStat, extension: &str) -> bool {
    !entry.is_directory && entry.name.ends_with(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_directory: bool) -> FileStat {
        FileStat {
            name: name.to_string(),
            resource: ResourceUri::new(format!("/x/{}", name)),
            is_directory,
            children: None,
        }
    }

    #[test]
    fn filter_keeps_markdown_files() {
        assert!(is_instruction_document(&entry("foo.md", false), ".md"));
        assert!(is_instruction_document(&entry("a.b.md", false), ".md"));
        assert!(is_instruction_document(&entry(".md", false), ".md"));
    }

    #[test]
    fn filter_rejects_other_entries() {
        assert!(!is_instruction_document(&entry("foo.MD", false), ".md"));
        assert!(!is_instruction_document(&entry("notes.txt", false), ".md"));
        assert!(!is_instruction_document(&entry("sub.md", true), ".md"));
    }
}
