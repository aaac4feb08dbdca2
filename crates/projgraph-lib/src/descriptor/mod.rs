//! Project descriptor and solution manifest reading
//!
//! The graph core never looks at raw descriptor text. It consumes
//! [`Descriptor`] values produced by a [`DescriptorReader`], and manifest
//! entries produced by [`solution::read_manifest`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;
use uuid::Uuid;

pub mod cache;
pub mod msbuild;
pub mod paths;
pub mod solution;

pub use cache::CachedReader;
pub use solution::{ManifestEntry, read_manifest};

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid project identity '{value}' in {path}")]
    InvalidIdentity { path: PathBuf, value: String },

    #[error("Malformed solution manifest {path} at line {line}: {reason}")]
    Manifest {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// A project reference as written in a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredReference {
    /// Absolute, normalised target path
    pub path: PathBuf,
    /// Identity the referrer recorded for the target
    pub id: Option<Uuid>,
}

/// A non-project assembly reference
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExternalReference {
    pub assembly_name: String,
    pub version: Option<String>,
}

/// Family-specific properties read from the descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorMetadata {
    pub framework: Option<String>,
    pub configuration_type: Option<String>,
    pub language_standard: Option<String>,
    pub uses_mfc: bool,
    pub is_managed_interop: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    pub identity: Option<Uuid>,
    pub name: Option<String>,
    pub project_references: Vec<DeclaredReference>,
    /// Raw library names, de-duplicated in first-seen order
    pub libraries: Vec<String>,
    pub external_references: Vec<ExternalReference>,
    pub metadata: DescriptorMetadata,
}

/// Source of parsed descriptors and manifests
pub trait DescriptorReader {
    fn read(&mut self, path: &Path) -> Result<Arc<Descriptor>, DescriptorError>;

    fn manifest(&mut self, path: &Path) -> Result<Vec<ManifestEntry>, DescriptorError> {
        read_manifest(path)
    }
}

/// Reads descriptors straight from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct MsBuildReader;

impl DescriptorReader for MsBuildReader {
    fn read(&mut self, path: &Path) -> Result<Arc<Descriptor>, DescriptorError> {
        let text = read_text(path)?;
        trace!(path = %path.display(), bytes = text.len(), "Parsing descriptor");
        msbuild::parse_descriptor(path, &text).map(Arc::new)
    }
}

/// Read a file, mapping a missing file to `NotFound`
pub(crate) fn read_text(path: &Path) -> Result<String, DescriptorError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DescriptorError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DescriptorError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Parse a project identity; braces are optional
pub fn parse_identity(path: &Path, raw: &str) -> Result<Uuid, DescriptorError> {
    let trimmed = raw.trim().trim_start_matches('{').trim_end_matches('}');
    Uuid::parse_str(trimmed).map_err(|_| DescriptorError::InvalidIdentity {
        path: path.to_path_buf(),
        value: raw.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
