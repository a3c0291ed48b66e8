//! Prompt reference resolution
//!
//! Instructions documents may point at other files with relative Markdown
//! links (`[style guide](../docs/style.md)`). This module reads a document,
//! collects those targets, keeps the ones that exist as files, and follows
//! Markdown targets transitively.
//!
//! Skipped link forms:
//! - Images: `![alt](diagram.png)`
//! - Targets with a scheme: `https://…`, `mailto:…`
//! - Pure anchors and absolute paths: `#section`, `/etc/hosts`
//! - Links inside fenced or inline code

use crate::attachment::PromptInstructionsAttachment;
use crate::error::QuireResult;
use crate::resource::ResourceUri;
use crate::storage::{FileService, ResolveRequest};
use quire_config::{InstructionsConfig, DEFAULT_INSTRUCTIONS_EXTENSION};
use regex::Regex;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace, warn};

static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(!?)\[[^\]]*\]\(\s*(?:<([^>\n]+)>|([^)\s<>]+))(?:\s+"[^"]*")?\s*\)"#)
        .expect("link regex")
});

static CODE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```[\s\S]*?^```|`[^`\n]+`").expect("code block regex"));

static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").expect("scheme regex"));

/// Relative link targets in `content`, in document order, without duplicates.
///
/// Fragments (`#…`) and queries (`?…`) are stripped and percent-escapes are
/// decoded, so `my%20notes.md` and `<my notes.md>` name the same file.
pub fn extract_link_targets(content: &str) -> Vec<String> {
    let code_spans: Vec<(usize, usize)> = CODE_BLOCK_REGEX
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .collect();
    let in_code = |offset: usize| code_spans.iter().any(|(s, e)| offset >= *s && offset < *e);

    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for caps in LINK_REGEX.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        if in_code(whole.start()) || !caps[1].is_empty() {
            continue;
        }

        let Some(raw) = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str().trim()) else {
            continue;
        };
        if raw.starts_with('#') || raw.starts_with('/') || SCHEME_REGEX.is_match(raw) {
            continue;
        }

        let path = raw.split(['#', '?']).next().unwrap_or_default();
        let target = match urlencoding::decode(path) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => path.to_string(),
        };
        if !target.is_empty() && seen.insert(target.clone()) {
            targets.push(target);
        }
    }

    targets
}

/// Builds [`PromptInstructionsAttachment`]s with their valid file references
pub struct PromptReferenceResolver {
    files: Arc<dyn FileService>,
    extension: String,
    follow_references: bool,
    max_depth: usize,
}

impl PromptReferenceResolver {
    /// Resolver with default settings (follow up to 8 hops of `.md` links)
    pub fn new(files: Arc<dyn FileService>) -> Self {
        Self::with_config(files, &InstructionsConfig::default())
    }

    /// Resolver honoring the configured extension and depth
    pub fn with_config(files: Arc<dyn FileService>, config: &InstructionsConfig) -> Self {
        Self {
            files,
            extension: if config.extension.is_empty() {
                DEFAULT_INSTRUCTIONS_EXTENSION.to_string()
            } else {
                config.extension.clone()
            },
            follow_references: config.follow_references,
            max_depth: config.max_reference_depth,
        }
    }

    /// Read `document` and collect the files it references.
    ///
    /// Failing to read the primary document is an error. Referenced documents
    /// that cannot be read are kept as references but not followed further.
    pub async fn resolve(&self, document: &ResourceUri) -> QuireResult<PromptInstructionsAttachment> {
        let primary = self.files.read_to_string(document).await?;
        let attachment = PromptInstructionsAttachment::new(document.clone());
        if !self.follow_references || self.max_depth == 0 {
            return Ok(attachment);
        }

        let mut visited: HashSet<ResourceUri> = HashSet::from([document.clone()]);
        let mut valid = Vec::new();
        let mut queue: VecDeque<(ResourceUri, String, usize)> =
            VecDeque::from([(document.clone(), primary, 1)]);

        while let Some((source, content, depth)) = queue.pop_front() {
            let Some(base) = source.parent() else { continue };
            let candidates: Vec<ResourceUri> = extract_link_targets(&content)
                .iter()
                .map(|target| base.join(target))
                .filter(|uri| !visited.contains(uri))
                .collect();
            if candidates.is_empty() {
                continue;
            }

            trace!(source = %source, count = candidates.len(), "Checking link targets");
            let results = self
                .files
                .resolve_all(candidates.into_iter().map(ResolveRequest::stat_only).collect())
                .await;

            for result in results {
                if !visited.insert(result.resource.clone()) {
                    continue;
                }
                let is_file = result.success
                    && result.stat.as_ref().is_some_and(|stat| !stat.is_directory);
                if !is_file {
                    debug!("Dropping unresolved reference {} in {}", result.resource, source);
                    continue;
                }

                valid.push(result.resource.clone());

                let follow = depth < self.max_depth
                    && result
                        .resource
                        .file_name()
                        .is_some_and(|name| name.ends_with(&self.extension));
                if !follow {
                    continue;
                }

                match self.files.read_to_string(&result.resource).await {
                    Ok(content) => queue.push_back((result.resource, content, depth + 1)),
                    Err(e) => warn!("Could not read referenced document: {}", e),
                }
            }
        }

        Ok(attachment.with_references(valid))
    }
}
