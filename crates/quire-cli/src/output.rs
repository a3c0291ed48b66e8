//! Output formatting for command results

use colored::Colorize;
use quire_core::{AttachmentView, DiscoveryReport, LabelProvider};

/// Text listing of discovered documents
pub fn format_report(report: &DiscoveryReport, labels: &dyn LabelProvider, show_unresolved: bool) -> String {
    let mut out = String::new();

    if report.documents.is_empty() {
        out.push_str("No instruction documents found.\n");
    } else {
        out.push_str(&format!(
            "Discovered {} instruction document(s):\n\n",
            report.documents.len()
        ));
        for uri in &report.documents {
            out.push_str(&format!("  {}\n", labels.uri_label(uri)));
        }
    }

    if show_unresolved && !report.unresolved.is_empty() {
        out.push_str(&format!("\n{}\n", "Unresolved locations:".yellow()));
        for uri in &report.unresolved {
            out.push_str(&format!("  {}\n", uri));
        }
    }

    out
}

/// Text rendering of an attachment view
pub fn format_view(view: &AttachmentView) -> String {
    let state = if view.enabled {
        "enabled".green()
    } else {
        "disabled".red()
    };

    let mut out = format!(
        "{}  {}  [{}]\n  {}\n",
        view.label.bold(),
        view.description.dimmed(),
        state,
        view.hover
    );

    out.push_str("\n  References:\n");
    for reference in &view.references {
        out.push_str(&format!("    - {}\n", reference));
    }

    let actions: Vec<_> = view.actions.iter().map(|a| a.label()).collect();
    out.push_str(&format!("\n  Actions: {}\n", actions.join(", ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_core::{AttachmentAction, ResourceUri, StaticWorkspace, WorkspaceLabels};

    #[test]
    fn empty_report_message() {
        colored::control::set_override(false);
        let labels = WorkspaceLabels::new(&StaticWorkspace::new(["/ws"]));
        let text = format_report(&DiscoveryReport::default(), &labels, true);
        assert_eq!(text, "No instruction documents found.\n");
    }

    #[test]
    fn report_lists_relative_labels_and_unresolved() {
        colored::control::set_override(false);
        let labels = WorkspaceLabels::new(&StaticWorkspace::new(["/ws"]));
        let report = DiscoveryReport {
            documents: vec![ResourceUri::new("/ws/.copilot/instructions/a.md")],
            unresolved: vec![ResourceUri::new("/other/.copilot/instructions")],
        };

        let text = format_report(&report, &labels, true);
        assert!(text.contains("Discovered 1 instruction document(s)"));
        assert!(text.contains("  .copilot/instructions/a.md\n"));
        assert!(text.contains("  /other/.copilot/instructions\n"));

        let quiet = format_report(&report, &labels, false);
        assert!(!quiet.contains("/other"));
    }

    #[test]
    fn view_lists_references_and_actions() {
        colored::control::set_override(false);
        let view = AttachmentView {
            uri: ResourceUri::new("/ws/a.md"),
            label: "a.md".to_string(),
            description: ".".to_string(),
            hover: "Prompt instructions: a.md".to_string(),
            enabled: false,
            references: vec![ResourceUri::new("/ws/b.md"), ResourceUri::new("/ws/a.md")],
            actions: vec![AttachmentAction::Enable, AttachmentAction::Remove],
        };

        let text = format_view(&view);
        assert!(text.starts_with("a.md  .  [disabled]"));
        assert!(text.contains("    - /ws/b.md\n    - /ws/a.md\n"));
        assert!(text.contains("Actions: Enable, Remove"));
    }
}
