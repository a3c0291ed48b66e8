//! `quire list`: instruction document discovery

use anyhow::Result;
use quire_core::{InstructionsDiscovery, LocalFileService, WorkspaceLabels};
use std::sync::Arc;
use tracing::info;

use super::workspace_for;
use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output;

/// Discover and print instruction documents
pub async fn execute(config: CliConfig, format: OutputFormat, show_unresolved: bool) -> Result<()> {
    let workspace = Arc::new(workspace_for(&config));
    let labels = WorkspaceLabels::new(&*workspace);
    let discovery = InstructionsDiscovery::with_config(
        workspace,
        Arc::new(LocalFileService::new()),
        &config.quire.instructions,
    );

    let report = discovery.discover().await;
    info!(
        documents = report.documents.len(),
        unresolved = report.unresolved.len(),
        "Discovery complete"
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", output::format_report(&report, &labels, show_unresolved)),
    }

    Ok(())
}
