//! In-memory descriptor source

use crate::descriptor::{Descriptor, DescriptorError, DescriptorReader, ManifestEntry, paths};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Serves descriptors and manifests from memory and records every read.
/// Unknown paths read as `NotFound`.
#[derive(Debug, Default)]
pub struct MemoryReader {
    descriptors: HashMap<PathBuf, Arc<Descriptor>>,
    manifests: HashMap<PathBuf, Vec<ManifestEntry>>,
    reads: Vec<PathBuf>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, path: impl AsRef<Path>, descriptor: Descriptor) -> Self {
        self.descriptors
            .insert(paths::normalize(path), Arc::new(descriptor));
        self
    }

    pub fn with_manifest(mut self, path: impl AsRef<Path>, entries: Vec<ManifestEntry>) -> Self {
        self.manifests.insert(paths::normalize(path), entries);
        self
    }

    /// Paths passed to `read`, in call order
    pub fn reads(&self) -> &[PathBuf] {
        &self.reads
    }

    pub fn read_count(&self, path: impl AsRef<Path>) -> usize {
        let wanted = paths::normalize(path);
        self.reads.iter().filter(|p| **p == wanted).count()
    }
}

impl DescriptorReader for MemoryReader {
    fn read(&mut self, path: &Path) -> Result<Arc<Descriptor>, DescriptorError> {
        let key = paths::normalize(path);
        self.reads.push(key.clone());
        self.descriptors
            .get(&key)
            .cloned()
            .ok_or(DescriptorError::NotFound { path: key })
    }

    fn manifest(&mut self, path: &Path) -> Result<Vec<ManifestEntry>, DescriptorError> {
        let key = paths::normalize(path);
        self.manifests
            .get(&key)
            .cloned()
            .ok_or(DescriptorError::NotFound { path: key })
    }
}
