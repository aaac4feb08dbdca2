use super::{Descriptor, DescriptorError, DescriptorReader, ManifestEntry, paths};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Per-run descriptor cache: each normalised path is parsed at most once.
///
/// Failed reads are not cached.
#[derive(Debug)]
pub struct CachedReader<R> {
    inner: R,
    entries: HashMap<PathBuf, Arc<Descriptor>>,
    parse_count: usize,
}

impl<R: DescriptorReader> CachedReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: HashMap::new(),
            parse_count: 0,
        }
    }

    /// Number of reads that reached the wrapped reader
    pub fn parse_count(&self) -> usize {
        self.parse_count
    }

    pub fn cached(&self) -> usize {
        self.entries.len()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: DescriptorReader> DescriptorReader for CachedReader<R> {
    fn read(&mut self, path: &Path) -> Result<Arc<Descriptor>, DescriptorError> {
        let key = paths::normalize(path);

        if let Some(hit) = self.entries.get(&key) {
            trace!(path = %key.display(), "Descriptor cache hit");
            return Ok(Arc::clone(hit));
        }

        self.parse_count += 1;
        let descriptor = self.inner.read(&key)?;
        self.entries.insert(key, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    fn manifest(&mut self, path: &Path) -> Result<Vec<ManifestEntry>, DescriptorError> {
        self.inner.manifest(path)
    }
}

#[cfg(test)]
mod tests {
    include!("cache.test.rs");
}
