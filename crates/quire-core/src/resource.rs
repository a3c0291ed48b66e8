//! URI-like resource identifiers
//!
//! Resources are identified by a `/`-separated location string. A leading
//! `file://` scheme is accepted and preserved; conversion to a filesystem
//! path strips it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Identifier for a file or directory known to a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    /// Wrap a location string
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Build a resource from a filesystem path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().replace('\\', "/"))
    }

    /// The raw location string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a `/`-separated relative path onto this location.
    ///
    /// Empty and `.` segments are dropped from both this location and
    /// `relative`; `..` removes the previous segment but never climbs above
    /// the first segment of a relative location.
    pub fn join(&self, relative: &str) -> Self {
        let (prefix, body) = self.split_scheme();
        let rooted = body.starts_with('/');
        let floor = usize::from(!rooted);
        let mut segments: Vec<&str> = Vec::new();

        for segment in body.split('/').chain(relative.split('/')) {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.len() > floor {
                        segments.pop();
                    }
                }
                other => segments.push(other),
            }
        }

        let mut joined = String::with_capacity(self.0.len() + relative.len() + 1);
        joined.push_str(prefix);
        if rooted {
            joined.push('/');
        }
        joined.push_str(&segments.join("/"));
        Self(joined)
    }

    /// This location with `.` and `..` segments resolved
    pub fn normalized(&self) -> Self {
        self.join("")
    }

    /// Last path segment, if any
    pub fn file_name(&self) -> Option<&str> {
        let (_, body) = self.split_scheme();
        body.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// The containing location, if this is not a root
    pub fn parent(&self) -> Option<Self> {
        let (prefix, body) = self.split_scheme();
        let trimmed = body.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        let parent = if idx == 0 { "/" } else { &trimmed[..idx] };
        Some(Self(format!("{}{}", prefix, parent)))
    }

    /// Whether `other` is this location or lies beneath it
    pub fn contains(&self, other: &ResourceUri) -> bool {
        let base = self.0.trim_end_matches('/');
        other.0 == base
            || other
                .0
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Convert to a local filesystem path
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.split_scheme().1)
    }

    fn split_scheme(&self) -> (&str, &str) {
        match self.0.strip_prefix(FILE_SCHEME) {
            Some(rest) => (FILE_SCHEME, rest),
            None => ("", self.0.as_str()),
        }
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceUri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ResourceUri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&Path> for ResourceUri {
    fn from(value: &Path) -> Self {
        Self::from_path(value)
    }
}

impl From<PathBuf> for ResourceUri {
    fn from(value: PathBuf) -> Self {
        Self::from_path(value)
    }
}
