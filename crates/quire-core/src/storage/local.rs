//! Local filesystem implementation of [`FileService`]

use super::{FileService, FileStat, ResolveRequest, ResolveResult};
use crate::error::{QuireError, QuireResult};
use crate::resource::ResourceUri;
use async_trait::async_trait;
use futures::future::join_all;
use std::path::Path;
use tracing::{debug, trace};

/// [`FileService`] backed by `tokio::fs`
///
/// Symlinks are followed when classifying entries; an entry whose target
/// cannot be read (for example a dangling link) is left out of a listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileService;

impl LocalFileService {
    /// Create a local file service
    pub fn new() -> Self {
        Self
    }

    async fn resolve_one(&self, request: ResolveRequest) -> ResolveResult {
        let path = request.resource.to_path_buf();
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Could not resolve {}: {}", request.resource, e);
                return ResolveResult::failed(request.resource);
            }
        };

        if !metadata.is_dir() {
            return ResolveResult::resolved(FileStat::file(request.resource));
        }

        if !request.resolve_children {
            return ResolveResult::resolved(FileStat::directory(request.resource, None));
        }

        match list_children(&request.resource, &path).await {
            Ok(children) => {
                ResolveResult::resolved(FileStat::directory(request.resource, Some(children)))
            }
            Err(e) => {
                debug!("Could not list {}: {}", request.resource, e);
                ResolveResult::failed(request.resource)
            }
        }
    }
}

async fn list_children(parent: &ResourceUri, path: &Path) -> std::io::Result<Vec<FileStat>> {
    let mut entries = tokio::fs::read_dir(path).await?;
    let mut children = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = match tokio::fs::metadata(entry.path()).await {
            Ok(metadata) => metadata,
            Err(e) => {
                trace!("Skipping unreadable entry {}: {}", entry.path().display(), e);
                continue;
            }
        };

        children.push(FileStat {
            resource: parent.join(&name),
            name,
            is_directory: metadata.is_dir(),
            children: None,
        });
    }

    // read_dir order is platform-defined
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

#[async_trait]
impl FileService for LocalFileService {
    async fn resolve_all(&self, requests: Vec<ResolveRequest>) -> Vec<ResolveResult> {
        trace!(count = requests.len(), "resolving batch");
        join_all(requests.into_iter().map(|request| self.resolve_one(request))).await
    }

    async fn read_to_string(&self, resource: &ResourceUri) -> QuireResult<String> {
        let path = resource.to_path_buf();
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| QuireError::Io { path, source })
    }
}
