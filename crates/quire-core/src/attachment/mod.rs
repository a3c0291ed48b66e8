//! Prompt instructions attachment
//!
//! The [`AttachmentModel`] owns which instructions document is attached to a
//! session. An [`InstructionsAttachmentController`] mirrors that slice of the
//! model, adds the user's enabled toggle, and drives an [`AttachmentRenderer`].

mod controller;
mod model;
mod state;
mod view;

pub use controller::InstructionsAttachmentController;
pub use model::{
    AttachmentModel, ContextChangeListener, InMemoryAttachmentModel, PromptInstructionsAttachment,
};
pub use state::{references_for, AttachmentState};
pub use view::{AttachmentAction, AttachmentRenderer, AttachmentView, LabelProvider, WorkspaceLabels};
