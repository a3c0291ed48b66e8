use quire_core::test_utils::RecordingRenderer;
use quire_core::{
    AttachmentModel, InMemoryAttachmentModel, InstructionsAttachmentController,
    PromptInstructionsAttachment, ResourceUri, StaticWorkspace, WorkspaceLabels,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Harness {
    model: Arc<InMemoryAttachmentModel>,
    renderer: Arc<RecordingRenderer>,
    controller: InstructionsAttachmentController,
}

fn harness() -> Harness {
    let model = Arc::new(InMemoryAttachmentModel::new());
    let renderer = Arc::new(RecordingRenderer::new());
    let labels = Arc::new(WorkspaceLabels::new(&StaticWorkspace::new(["/ws"])));
    let controller =
        InstructionsAttachmentController::new(model.clone(), renderer.clone(), labels);
    Harness {
        model,
        renderer,
        controller,
    }
}

fn attach(model: &InMemoryAttachmentModel, uri: &str) {
    model.attach_prompt_instructions(PromptInstructionsAttachment::new(uri.into()));
}

#[test]
fn test_initial_state_is_detached_and_enabled() {
    let h = harness();
    assert!(!h.controller.is_visible());
    assert!(h.controller.is_enabled());
    assert_eq!(h.controller.current_uri(), None);
    assert!(h.controller.current_references().is_empty());
    assert!(h.controller.view().is_none());
}

#[test]
fn test_toggle_twice_restores_and_fires_twice() {
    let h = harness();
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let _sub = h.controller.on_did_change_enabled(move || {
        f.fetch_add(1, Ordering::SeqCst);
    });

    let original = h.controller.is_enabled();
    h.controller.toggle_enabled().toggle_enabled();

    assert_eq!(h.controller.is_enabled(), original);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn test_toggle_rerenders() {
    let h = harness();
    attach(&h.model, "/ws/a.md");
    let renders = h.renderer.render_count();

    h.controller.toggle_enabled();

    assert_eq!(h.renderer.render_count(), renders + 1);
    assert!(!h.renderer.last_view().unwrap().enabled);
}

#[test]
fn test_visibility_follows_model_changes() {
    let h = harness();

    attach(&h.model, "/ws/U.md");
    assert!(h.controller.is_visible());
    assert_eq!(h.controller.current_uri(), Some(ResourceUri::new("/ws/U.md")));

    h.model.remove_prompt_instructions();
    assert!(!h.controller.is_visible());
    assert_eq!(h.controller.current_uri(), None);
}

#[test]
fn test_enabled_survives_attachment_changes() {
    let h = harness();
    h.controller.toggle_enabled();

    attach(&h.model, "/ws/a.md");
    h.model.remove_prompt_instructions();
    attach(&h.model, "/ws/b.md");

    assert!(!h.controller.is_enabled());
}

#[test]
fn test_references_put_primary_document_last() {
    let h = harness();
    h.model.attach_prompt_instructions(
        PromptInstructionsAttachment::new("/ws/primary.md".into())
            .with_references(vec!["/ws/refA.md".into(), "/ws/refB.md".into()]),
    );

    assert_eq!(
        h.controller.current_references(),
        vec![
            ResourceUri::new("/ws/refA.md"),
            ResourceUri::new("/ws/refB.md"),
            ResourceUri::new("/ws/primary.md"),
        ]
    );
    assert_eq!(
        h.renderer.last_view().unwrap().references.last(),
        Some(&ResourceUri::new("/ws/primary.md"))
    );
}

#[test]
fn test_detached_render_only_clears() {
    let h = harness();
    attach(&h.model, "/ws/a.md");
    let clears = h.renderer.clear_count();
    let renders = h.renderer.render_count();

    h.model.remove_prompt_instructions();

    assert_eq!(h.renderer.clear_count(), clears + 1);
    assert_eq!(h.renderer.render_count(), renders);
}

#[test]
fn test_remove_delegates_to_model() {
    let h = harness();
    attach(&h.model, "/ws/a.md");

    h.controller.remove();

    assert!(h.model.prompt_instructions().is_none());
    assert!(!h.controller.is_visible());
}

#[test]
fn test_no_rerender_after_dispose() {
    let h = harness();
    attach(&h.model, "/ws/a.md");
    h.controller.dispose();

    let clears = h.renderer.clear_count();
    let renders = h.renderer.render_count();

    attach(&h.model, "/ws/b.md");
    h.model.remove_prompt_instructions();

    assert_eq!(h.renderer.clear_count(), clears);
    assert_eq!(h.renderer.render_count(), renders);
    assert!(h.renderer.is_disposed());
    assert_eq!(h.model.listener_count(), 0);
}

#[test]
fn test_dispose_is_idempotent_and_silences_toggle() {
    let h = harness();
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let _sub = h.controller.on_did_change_enabled(move || {
        f.fetch_add(1, Ordering::SeqCst);
    });

    h.controller.dispose();
    h.controller.dispose();
    h.controller.toggle_enabled();

    assert!(h.controller.is_disposed());
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn test_two_controllers_share_one_model() {
    let model = Arc::new(InMemoryAttachmentModel::new());
    let labels = Arc::new(WorkspaceLabels::new(&StaticWorkspace::new(["/ws"])));
    let first = InstructionsAttachmentController::new(
        model.clone(),
        Arc::new(RecordingRenderer::new()),
        labels.clone(),
    );
    let second = InstructionsAttachmentController::new(
        model.clone(),
        Arc::new(RecordingRenderer::new()),
        labels,
    );

    attach(&model, "/ws/a.md");
    first.toggle_enabled();

    assert!(first.is_visible() && second.is_visible());
    assert!(!first.is_enabled());
    assert!(second.is_enabled());
}
