//! `quire inspect`: attach one instructions document and show its view

use anyhow::{bail, Context, Result};
use quire_core::{
    InMemoryAttachmentModel, InstructionsAttachmentController, LocalFileService,
    PromptReferenceResolver, ResourceUri, WorkspaceLabels,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::workspace_for;
use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output;
use crate::render::TerminalRenderer;

/// Resolve references, attach, and print the rendered view
pub async fn execute(config: CliConfig, format: OutputFormat, file: PathBuf, toggle: bool) -> Result<()> {
    let path = if file.is_absolute() {
        file
    } else {
        std::env::current_dir()?.join(file)
    };
    let uri = ResourceUri::from_path(&path).normalized();

    let files = Arc::new(LocalFileService::new());
    let resolver = PromptReferenceResolver::with_config(files, &config.quire.instructions);
    let attachment = resolver
        .resolve(&uri)
        .await
        .with_context(|| format!("Failed to read instructions document {}", path.display()))?;
    debug!(
        references = attachment.valid_file_reference_uris.len(),
        "Resolved prompt references"
    );

    let workspace = workspace_for(&config);
    let model = Arc::new(InMemoryAttachmentModel::new());
    let renderer = Arc::new(TerminalRenderer::new());
    let controller = InstructionsAttachmentController::new(
        model.clone(),
        renderer.clone(),
        Arc::new(WorkspaceLabels::new(&workspace)),
    );

    model.attach_prompt_instructions(attachment);
    if toggle {
        controller.toggle_enabled();
    }

    let Some(view) = renderer.current() else {
        bail!("Attachment for {} was not rendered", path.display());
    };
    controller.dispose();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => print!("{}", output::format_view(&view)),
    }

    Ok(())
}
