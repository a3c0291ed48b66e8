//! Attachment model boundary

use crate::events::{Emitter, Subscription};
use crate::resource::ResourceUri;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Listener for attachment model changes; carries no payload
pub type ContextChangeListener = Box<dyn Fn() + Send + Sync>;

/// The instructions document attached to a session, with the files it points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptInstructionsAttachment {
    /// The attached document
    pub uri: ResourceUri,
    /// Files the document references that are known to exist
    pub valid_file_reference_uris: Vec<ResourceUri>,
}

impl PromptInstructionsAttachment {
    /// An attachment with no known references
    pub fn new(uri: ResourceUri) -> Self {
        Self {
            uri,
            valid_file_reference_uris: Vec::new(),
        }
    }

    /// Replace the known references
    pub fn with_references(mut self, references: Vec<ResourceUri>) -> Self {
        self.valid_file_reference_uris = references;
        self
    }
}

/// Owner of the authoritative attachment state for one session
pub trait AttachmentModel: Send + Sync {
    /// Register for change notifications
    fn on_did_change_context(&self, listener: ContextChangeListener) -> Subscription;

    /// The currently attached instructions document, if any
    fn prompt_instructions(&self) -> Option<PromptInstructionsAttachment>;

    /// Detach the current instructions document
    fn remove_prompt_instructions(&self);
}

/// Process-local [`AttachmentModel`]
///
/// Every effective mutation fires exactly one change notification, after the
/// internal lock has been released.
#[derive(Debug, Default)]
pub struct InMemoryAttachmentModel {
    prompt_instructions: Mutex<Option<PromptInstructionsAttachment>>,
    on_did_change: Emitter<()>,
}

impl InMemoryAttachmentModel {
    /// Create a model with nothing attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the instructions document
    pub fn attach_prompt_instructions(&self, attachment: PromptInstructionsAttachment) {
        debug!("Attaching prompt instructions {}", attachment.uri);
        *self.prompt_instructions.lock() = Some(attachment);
        self.on_did_change.fire(&());
    }

    /// Update the known references of the attached document.
    ///
    /// Returns `false` (and fires nothing) when no document is attached.
    pub fn set_valid_file_references(&self, references: Vec<ResourceUri>) -> bool {
        {
            let mut slot = self.prompt_instructions.lock();
            match slot.as_mut() {
                Some(attachment) => attachment.valid_file_reference_uris = references,
                None => return false,
            }
        }
        self.on_did_change.fire(&());
        true
    }

    /// Number of registered change listeners
    pub fn listener_count(&self) -> usize {
        self.on_did_change.listener_count()
    }
}

impl AttachmentModel for InMemoryAttachmentModel {
    fn on_did_change_context(&self, listener: ContextChangeListener) -> Subscription {
        self.on_did_change.subscribe(move |_| listener())
    }

    fn prompt_instructions(&self) -> Option<PromptInstructionsAttachment> {
        self.prompt_instructions.lock().clone()
    }

    fn remove_prompt_instructions(&self) {
        let removed = self.prompt_instructions.lock().take();
        if let Some(attachment) = removed {
            debug!("Removed prompt instructions {}", attachment.uri);
            self.on_did_change.fire(&());
        }
    }
}
