//! Terminal-side attachment renderer

use parking_lot::Mutex;
use quire_core::{AttachmentRenderer, AttachmentView};

/// Holds the most recently rendered view so a command can print it
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    current: Mutex<Option<AttachmentView>>,
    renders: Mutex<usize>,
}

impl TerminalRenderer {
    /// Renderer with nothing on screen
    pub fn new() -> Self {
        Self::default()
    }

    /// The view on screen, `None` after a clear
    pub fn current(&self) -> Option<AttachmentView> {
        self.current.lock().clone()
    }

    /// How many times a view was drawn
    pub fn render_count(&self) -> usize {
        *self.renders.lock()
    }
}

impl AttachmentRenderer for TerminalRenderer {
    fn clear(&self) {
        *self.current.lock() = None;
    }

    fn render(&self, view: &AttachmentView) {
        *self.current.lock() = Some(view.clone());
        *self.renders.lock() += 1;
    }
}
