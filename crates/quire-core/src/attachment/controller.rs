//! State controller for one attached instructions document
//!
//! ```text
//!            model change (uri set)
//!   Detached ───────────────────────▶ Attached
//!      ▲                                  │
//!      └──────────────────────────────────┘
//!            model change (uri cleared)
//!
//!   enabled: flipped only by toggle_enabled(), independent of attachment
//!   dispose(): terminal, reachable from either state
//! ```
//!
//! The model subscription is the only writer of `current_uri`. Each model
//! notification re-reads the attached document, stores it, then re-renders,
//! all before the notification handler returns.

use super::model::{AttachmentModel, PromptInstructionsAttachment};
use super::state::{references_for, AttachmentState};
use super::view::{AttachmentAction, AttachmentRenderer, AttachmentView, LabelProvider};
use crate::events::{Emitter, Subscription};
use crate::resource::ResourceUri;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Mirrors the attached prompt instructions of an [`AttachmentModel`]
pub struct InstructionsAttachmentController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    model: Arc<dyn AttachmentModel>,
    renderer: Arc<dyn AttachmentRenderer>,
    labels: Arc<dyn LabelProvider>,
    state: Mutex<AttachmentState>,
    on_did_change_enabled: Emitter<()>,
    model_subscription: Mutex<Subscription>,
    disposed: AtomicBool,
}

impl InstructionsAttachmentController {
    /// Bind a controller to `model`.
    ///
    /// Starts detached and enabled, and renders once (a `clear`).
    pub fn new(
        model: Arc<dyn AttachmentModel>,
        renderer: Arc<dyn AttachmentRenderer>,
        labels: Arc<dyn LabelProvider>,
    ) -> Self {
        let inner = Arc::new_cyclic(|weak: &Weak<ControllerInner>| {
            let weak = weak.clone();
            let subscription = model.on_did_change_context(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_model_change();
                }
            }));

            ControllerInner {
                model,
                renderer,
                labels,
                state: Mutex::new(AttachmentState::new()),
                on_did_change_enabled: Emitter::new(),
                model_subscription: Mutex::new(subscription),
                disposed: AtomicBool::new(false),
            }
        });

        inner.render();
        Self { inner }
    }

    /// Flip the enabled flag, notify enabled-change listeners, then re-render.
    pub fn toggle_enabled(&self) -> &Self {
        if self.inner.is_disposed() {
            trace!("toggle_enabled ignored on disposed controller");
            return self;
        }

        let enabled = self.inner.state.lock().toggle_enabled();
        debug!(enabled, "Prompt instructions attachment toggled");
        self.inner.on_did_change_enabled.fire(&());
        self.inner.render();
        self
    }

    /// Whether a document is currently attached
    pub fn is_visible(&self) -> bool {
        self.inner.state.lock().is_visible()
    }

    /// Whether the user has the attachment switched on
    pub fn is_enabled(&self) -> bool {
        self.inner.state.lock().enabled
    }

    /// The attached document, as last read from the model
    pub fn current_uri(&self) -> Option<ResourceUri> {
        self.inner.state.lock().current_uri.clone()
    }

    /// Snapshot of the controller state
    pub fn state(&self) -> AttachmentState {
        self.inner.state.lock().clone()
    }

    /// Valid file references of the attached document, then the document itself
    pub fn current_references(&self) -> Vec<ResourceUri> {
        self.inner.current_references()
    }

    /// The view the renderer was (or would be) given; `None` when detached
    pub fn view(&self) -> Option<AttachmentView> {
        self.inner.view()
    }

    /// Ask the model to detach the current document.
    ///
    /// The controller's own state changes only through the resulting notification.
    pub fn remove(&self) {
        if self.inner.is_disposed() {
            return;
        }
        debug!("Removing prompt instructions attachment");
        self.inner.model.remove_prompt_instructions();
    }

    /// Run a context menu action
    pub fn run_action(&self, action: AttachmentAction) {
        match action {
            AttachmentAction::Enable if !self.is_enabled() => {
                self.toggle_enabled();
            }
            AttachmentAction::Disable if self.is_enabled() => {
                self.toggle_enabled();
            }
            AttachmentAction::Remove => self.remove(),
            _ => {}
        }
    }

    /// Register for enabled-state changes (no payload)
    pub fn on_did_change_enabled<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.on_did_change_enabled.subscribe(move |_| listener())
    }

    /// Release the model subscription and render resources. Idempotent.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    /// Whether [`dispose`](Self::dispose) has run
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

impl Drop for InstructionsAttachmentController {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl ControllerInner {
    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn handle_model_change(&self) {
        if self.is_disposed() {
            return;
        }

        let uri = self.model.prompt_instructions().map(|attachment| attachment.uri);
        trace!(attached = uri.is_some(), "Attachment model changed");
        self.state.lock().current_uri = uri;
        self.render();
    }

    fn current_references(&self) -> Vec<ResourceUri> {
        references_for(self.model.prompt_instructions().as_ref())
    }

    fn view(&self) -> Option<AttachmentView> {
        let state = self.state.lock().clone();
        let uri = state.current_uri?;
        let attachment = self.model.prompt_instructions();
        Some(build_view(uri, state.enabled, attachment.as_ref(), self.labels.as_ref()))
    }

    fn render(&self) {
        if self.is_disposed() {
            return;
        }

        let view = self.view();
        self.renderer.clear();
        if let Some(view) = view {
            self.renderer.render(&view);
        }
    }

    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        self.model_subscription.lock().dispose();
        self.on_did_change_enabled.clear();
        self.renderer.dispose();
        debug!("Prompt instructions controller disposed");
    }
}

fn build_view(
    uri: ResourceUri,
    enabled: bool,
    attachment: Option<&PromptInstructionsAttachment>,
    labels: &dyn LabelProvider,
) -> AttachmentView {
    let label = uri.file_name().unwrap_or(uri.as_str()).to_string();
    let description = uri
        .parent()
        .map(|parent| labels.uri_label(&parent))
        .unwrap_or_default();

    let mut hover = format!("Prompt instructions: {}", labels.uri_label(&uri));
    if !enabled {
        hover.push_str(" (disabled)");
    }

    // A stale model snapshot for another document contributes no references
    let references = match attachment {
        Some(attachment) if attachment.uri == uri => references_for(Some(attachment)),
        _ => vec![uri.clone()],
    };

    let toggle = if enabled {
        AttachmentAction::Disable
    } else {
        AttachmentAction::Enable
    };

    AttachmentView {
        uri,
        label,
        description,
        hover,
        enabled,
        references,
        actions: vec![toggle, AttachmentAction::Remove],
    }
}
