use super::GraphError;
use super::discovery::{DiscoveryOptions, discover};
use super::merge::merge_graphs;
use super::reconcile::reconcile;
use super::root::RootGraph;
use crate::descriptor::{CachedReader, DescriptorReader, MsBuildReader};
use std::path::PathBuf;
use tracing::info;

/// Settings for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub root_file: PathBuf,
    /// Further roots whose projects may resolve the primary's placeholders
    pub merge_with: Vec<PathBuf>,
    pub include_external_references: bool,
    /// Advisory only
    pub search_depth: Option<usize>,
}

impl AnalysisRequest {
    pub fn new(root_file: impl Into<PathBuf>) -> Self {
        Self {
            root_file: root_file.into(),
            ..Self::default()
        }
    }
}

/// Run the pipeline against the file system with a per-run descriptor cache
pub fn analyze(request: &AnalysisRequest) -> Result<RootGraph, GraphError> {
    let mut reader = CachedReader::new(MsBuildReader);
    analyze_with(&mut reader, request)
}

/// Open, discover and reconcile every root, then merge the secondaries into
/// the primary.
pub fn analyze_with<R: DescriptorReader>(
    reader: &mut R,
    request: &AnalysisRequest,
) -> Result<RootGraph, GraphError> {
    let options = DiscoveryOptions {
        include_external_references: request.include_external_references,
        ..DiscoveryOptions::default()
    };

    // Every root is validated before any discovery starts
    let mut primary = RootGraph::open(&request.root_file, request.search_depth)?;
    let mut secondaries = request
        .merge_with
        .iter()
        .map(|path| RootGraph::open(path, request.search_depth))
        .collect::<Result<Vec<_>, _>>()?;

    for graph in std::iter::once(&mut primary).chain(secondaries.iter_mut()) {
        discover(graph, reader, options)?;
        reconcile(&mut graph.repository)?;
    }

    if !secondaries.is_empty() {
        merge_graphs(&mut primary, &secondaries)?;
    }

    info!(
        root = %primary.name,
        projects = primary.repository.len(),
        "Analysis complete"
    );
    Ok(primary)
}

#[cfg(test)]
mod tests {
    include!("analysis.test.rs");
}
