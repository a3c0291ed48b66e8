//! Presentation state for one attached instructions document

use super::model::PromptInstructionsAttachment;
use crate::resource::ResourceUri;

/// Per-widget attachment state
///
/// `visible` is derived from `current_uri` and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentState {
    /// Whether the user has the attachment switched on
    pub enabled: bool,
    /// The attached document, mirrored from the model
    pub current_uri: Option<ResourceUri>,
}

impl Default for AttachmentState {
    fn default() -> Self {
        Self {
            enabled: true,
            current_uri: None,
        }
    }
}

impl AttachmentState {
    /// Detached and enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a document is attached
    pub fn is_visible(&self) -> bool {
        self.current_uri.is_some()
    }

    /// Flip `enabled`, returning the new value
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// References of an attachment: known valid file references, then the document itself.
///
/// The primary document is always the last element. Empty when nothing is attached.
pub fn references_for(attachment: Option<&PromptInstructionsAttachment>) -> Vec<ResourceUri> {
    let Some(attachment) = attachment else {
        return Vec::new();
    };

    let mut references = Vec::with_capacity(attachment.valid_file_reference_uris.len() + 1);
    references.extend(attachment.valid_file_reference_uris.iter().cloned());
    references.push(attachment.uri.clone());
    references
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_detached_and_enabled() {
        let state = AttachmentState::new();
        assert!(state.enabled);
        assert!(!state.is_visible());
    }

    #[test]
    fn visibility_tracks_current_uri() {
        let mut state = AttachmentState::new();
        state.current_uri = Some("/a.md".into());
        assert!(state.is_visible());
        state.current_uri = None;
        assert!(!state.is_visible());
    }

    #[test]
    fn toggle_twice_restores() {
        let mut state = AttachmentState::new();
        assert!(!state.toggle_enabled());
        assert!(state.toggle_enabled());
    }

    #[test]
    fn references_put_primary_last() {
        let attachment = PromptInstructionsAttachment::new("/primary.md".into())
            .with_references(vec!["/refA.md".into(), "/refB.md".into()]);

        let refs = references_for(Some(&attachment));
        assert_eq!(
            refs,
            vec![
                ResourceUri::new("/refA.md"),
                ResourceUri::new("/refB.md"),
                ResourceUri::new("/primary.md"),
            ]
        );
    }

    #[test]
    fn references_empty_when_detached() {
        assert!(references_for(None).is_empty());
    }
}
