//! In-memory collaborators for tests

use crate::attachment::{AttachmentRenderer, AttachmentView};
use crate::error::{QuireError, QuireResult};
use crate::resource::ResourceUri;
use crate::storage::{FileService, FileStat, ResolveRequest, ResolveResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone)]
enum FakeEntry {
    File(String),
    Directory,
}

/// [`FileService`] over an in-memory tree that records every batch it receives
#[derive(Debug, Default)]
pub struct FakeFileService {
    entries: Mutex<HashMap<ResourceUri, FakeEntry>>,
    failures: Mutex<HashSet<ResourceUri>>,
    batches: Mutex<Vec<Vec<ResolveRequest>>>,
}

impl FakeFileService {
    /// Empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content
    pub fn with_file(self, uri: &str, content: &str) -> Self {
        self.entries
            .lock()
            .insert(ResourceUri::new(uri), FakeEntry::File(content.to_string()));
        self
    }

    /// Add an (possibly empty) directory
    pub fn with_dir(self, uri: &str) -> Self {
        self.entries
            .lock()
            .insert(ResourceUri::new(uri), FakeEntry::Directory);
        self
    }

    /// Make resolving `uri` fail regardless of its contents
    pub fn with_failure(self, uri: &str) -> Self {
        self.failures.lock().insert(ResourceUri::new(uri));
        self
    }

    /// Every batch passed to `resolve_all`, in call order
    pub fn batches(&self) -> Vec<Vec<ResolveRequest>> {
        self.batches.lock().clone()
    }

    /// Number of `resolve_all` calls
    pub fn batch_count(&self) -> usize {
        self.batches.lock().len()
    }

    fn resolve_one(&self, request: &ResolveRequest) -> ResolveResult {
        let uri = &request.resource;
        if self.failures.lock().contains(uri) {
            return ResolveResult::failed(uri.clone());
        }

        let entries = self.entries.lock();
        if let Some(FakeEntry::File(_)) = entries.get(uri) {
            return ResolveResult::resolved(FileStat::file(uri.clone()));
        }

        // Direct children, including directories implied by deeper entries
        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        for (key, entry) in entries.iter() {
            if key == uri || !uri.contains(key) {
                continue;
            }
            let rest = key.as_str()[uri.as_str().trim_end_matches('/').len()..].trim_start_matches('/');
            let mut segments = rest.splitn(2, '/');
            let name = segments.next().unwrap_or_default().to_string();
            let nested = segments.next().is_some();
            let is_dir = nested || matches!(entry, FakeEntry::Directory);
            let slot = children.entry(name).or_insert(false);
            *slot |= is_dir;
        }

        let is_dir = matches!(entries.get(uri), Some(FakeEntry::Directory)) || !children.is_empty();
        if !is_dir {
            return ResolveResult::failed(uri.clone());
        }

        let listing = request.resolve_children.then(|| {
            children
                .into_iter()
                .map(|(name, is_directory)| FileStat {
                    resource: uri.join(&name),
                    name,
                    is_directory,
                    children: None,
                })
                .collect()
        });
        ResolveResult::resolved(FileStat::directory(uri.clone(), listing))
    }
}

#[async_trait]
impl FileService for FakeFileService {
    async fn resolve_all(&self, requests: Vec<ResolveRequest>) -> Vec<ResolveResult> {
        self.batches.lock().push(requests.clone());
        requests.iter().map(|request| self.resolve_one(request)).collect()
    }

    async fn read_to_string(&self, resource: &ResourceUri) -> QuireResult<String> {
        match self.entries.lock().get(resource) {
            Some(FakeEntry::File(content)) => Ok(content.clone()),
            _ => Err(QuireError::NotFound(resource.to_string())),
        }
    }
}

/// [`AttachmentRenderer`] that records every call
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    clears: Mutex<usize>,
    views: Mutex<Vec<AttachmentView>>,
    disposed: Mutex<bool>,
}

impl RecordingRenderer {
    /// Fresh recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `clear` calls
    pub fn clear_count(&self) -> usize {
        *self.clears.lock()
    }

    /// Number of `render` calls
    pub fn render_count(&self) -> usize {
        self.views.lock().len()
    }

    /// Most recent rendered view
    pub fn last_view(&self) -> Option<AttachmentView> {
        self.views.lock().last().cloned()
    }

    /// Whether `dispose` was called
    pub fn is_disposed(&self) -> bool {
        *self.disposed.lock()
    }
}

impl AttachmentRenderer for RecordingRenderer {
    fn clear(&self) {
        *self.clears.lock() += 1;
    }

    fn render(&self, view: &AttachmentView) {
        self.views.lock().push(view.clone());
    }

    fn dispose(&self) {
        *self.disposed.lock() = true;
    }
}
