//! Storage collaborator abstraction
//!
//! Discovery and reference resolution talk to storage only through
//! [`FileService`]. The batched [`FileService::resolve_all`] call reports
//! failure per entry; one unresolvable location never aborts the batch.

use crate::error::QuireResult;
use crate::resource::ResourceUri;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod local;

pub use local::LocalFileService;

/// One location to resolve in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Location to stat
    pub resource: ResourceUri,
    /// List direct children when the location is a directory
    pub resolve_children: bool,
}

impl ResolveRequest {
    /// Request a location together with its direct children
    pub fn with_children(resource: ResourceUri) -> Self {
        Self {
            resource,
            resolve_children: true,
        }
    }

    /// Request only the location itself
    pub fn stat_only(resource: ResourceUri) -> Self {
        Self {
            resource,
            resolve_children: false,
        }
    }
}

/// Metadata for a resolved location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Last path segment
    pub name: String,
    /// Full identifier
    pub resource: ResourceUri,
    /// Whether the location is a directory
    pub is_directory: bool,
    /// Direct children, present only for a listed directory
    pub children: Option<Vec<FileStat>>,
}

impl FileStat {
    /// A plain file entry
    pub fn file(resource: ResourceUri) -> Self {
        Self {
            name: resource.file_name().unwrap_or_default().to_string(),
            resource,
            is_directory: false,
            children: None,
        }
    }

    /// A directory entry with an optional listing
    pub fn directory(resource: ResourceUri, children: Option<Vec<FileStat>>) -> Self {
        Self {
            name: resource.file_name().unwrap_or_default().to_string(),
            resource,
            is_directory: true,
            children,
        }
    }
}

/// Outcome for one entry of a batched resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResult {
    /// The requested location
    pub resource: ResourceUri,
    /// Whether the location could be resolved
    pub success: bool,
    /// Metadata, when resolved
    pub stat: Option<FileStat>,
}

impl ResolveResult {
    /// A successful resolution
    pub fn resolved(stat: FileStat) -> Self {
        Self {
            resource: stat.resource.clone(),
            success: true,
            stat: Some(stat),
        }
    }

    /// A failed resolution
    pub fn failed(resource: ResourceUri) -> Self {
        Self {
            resource,
            success: false,
            stat: None,
        }
    }
}

/// File access capability
///
/// Implementations must be Send + Sync so a single service can be shared by
/// discovery, reference resolution, and the host.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Resolve every request, returning one result per request in request order.
    ///
    /// Must not fail as a whole: a location that is missing or cannot be
    /// listed yields an entry with `success == false`.
    async fn resolve_all(&self, requests: Vec<ResolveRequest>) -> Vec<ResolveResult>;

    /// Read a file as UTF-8 text
    async fn read_to_string(&self, resource: &ResourceUri) -> QuireResult<String>;
}
