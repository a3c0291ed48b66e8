//! # Quire Core
//!
//! Instruction document discovery and prompt attachment state.
//!
//! Two pieces carry the logic:
//!
//! - [`InstructionsDiscovery`] resolves one candidate directory per workspace
//!   folder in a single batched storage request and keeps the qualifying files.
//! - [`InstructionsAttachmentController`] mirrors the attached instructions
//!   document of an [`AttachmentModel`], tracks the user's enabled toggle, and
//!   drives an [`AttachmentRenderer`].
//!
//! Every collaborator (storage, workspace description, attachment model,
//! rendering, labeling) is a trait passed in at construction.

pub mod attachment;
pub mod discovery;
mod error;
pub mod events;
pub mod references;
pub mod resource;
pub mod storage;
pub mod workspace;

pub use attachment::{
    AttachmentAction, AttachmentModel, AttachmentRenderer, AttachmentState, AttachmentView,
    ContextChangeListener, InMemoryAttachmentModel, InstructionsAttachmentController,
    LabelProvider, PromptInstructionsAttachment, WorkspaceLabels,
};
pub use discovery::{DiscoveryReport, InstructionsDiscovery};
pub use error::{QuireError, QuireResult};
pub use events::{Emitter, Subscription};
pub use references::PromptReferenceResolver;
pub use resource::ResourceUri;
pub use storage::{FileService, FileStat, LocalFileService, ResolveRequest, ResolveResult};
pub use workspace::{StaticWorkspace, WorkbenchState, Workspace, WorkspaceContext, WorkspaceFolder};

pub use quire_config::{DEFAULT_INSTRUCTIONS_EXTENSION, DEFAULT_INSTRUCTIONS_SUBPATH};

#[cfg(feature = "test-utils")]
pub mod test_utils;
