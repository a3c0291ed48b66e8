//! Render and labeling collaborators

use crate::resource::ResourceUri;
use crate::workspace::WorkspaceContext;
use serde::{Deserialize, Serialize};

/// User-invocable actions offered by an attached instructions document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentAction {
    /// Switch a disabled attachment back on
    Enable,
    /// Switch an enabled attachment off
    Disable,
    /// Detach the document from the session
    Remove,
}

impl AttachmentAction {
    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enable => "Enable",
            Self::Disable => "Disable",
            Self::Remove => "Remove",
        }
    }
}

/// Everything a renderer needs to draw one attached document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentView {
    /// The attached document
    pub uri: ResourceUri,
    /// File name
    pub label: String,
    /// Location of the containing directory
    pub description: String,
    /// Hover text
    pub hover: String,
    /// Whether the attachment is switched on
    pub enabled: bool,
    /// References followed by the document itself
    pub references: Vec<ResourceUri>,
    /// Actions for the context menu, toggle first
    pub actions: Vec<AttachmentAction>,
}

/// Visual collaborator driven by the controller
///
/// Every re-render is a `clear` followed by `render` when a document is
/// attached, or a lone `clear` when detached.
pub trait AttachmentRenderer: Send + Sync {
    /// Remove the visual subtree
    fn clear(&self);

    /// Rebuild the visual subtree from `view`
    fn render(&self, view: &AttachmentView);

    /// Release render-scoped resources; called once when the controller is disposed
    fn dispose(&self) {}
}

/// Produces human-readable locations
pub trait LabelProvider: Send + Sync {
    /// Label for a resource, relative to the workspace when possible
    fn uri_label(&self, uri: &ResourceUri) -> String;
}

/// Labels resources relative to the workspace folder that contains them.
///
/// In a multi-root workspace the folder name is kept as a prefix.
pub struct WorkspaceLabels {
    roots: Vec<(String, ResourceUri)>,
    multi_root: bool,
}

impl WorkspaceLabels {
    /// Snapshot the folders of `workspace`
    pub fn new(workspace: &dyn WorkspaceContext) -> Self {
        let roots: Vec<_> = workspace
            .workspace()
            .folders
            .into_iter()
            .map(|folder| (folder.name, folder.uri))
            .collect();
        let multi_root = roots.len() > 1;
        Self { roots, multi_root }
    }
}

impl LabelProvider for WorkspaceLabels {
    fn uri_label(&self, uri: &ResourceUri) -> String {
        for (name, root) in &self.roots {
            if !root.contains(uri) {
                continue;
            }
            let relative = uri
                .as_str()
                .strip_prefix(root.as_str().trim_end_matches('/'))
                .unwrap_or_default()
                .trim_start_matches('/');
            return match (self.multi_root, relative.is_empty()) {
                (true, true) => name.clone(),
                (true, false) => format!("{} • {}", name, relative),
                (false, true) => ".".to_string(),
                (false, false) => relative.to_string(),
            };
        }
        uri.to_string()
    }
}
