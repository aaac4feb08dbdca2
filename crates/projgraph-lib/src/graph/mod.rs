//! Project dependency graph construction
//!
//! - [`discovery`]: worklist discovery from a manifest or project root
//! - [`reconcile`]: upgrade placeholder and id-less links to resolved links
//! - [`merge`]: import matching subtrees from secondary graphs
//! - [`analysis`]: the full pipeline over an [`AnalysisRequest`]
//! - [`view`]: read-only petgraph projection used by renderers

use crate::descriptor::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

pub mod analysis;
pub mod discovery;
pub mod link;
pub mod merge;
pub mod node;
pub mod reconcile;
pub mod repository;
pub mod root;
pub mod view;

pub use analysis::{AnalysisRequest, analyze, analyze_with};
pub use discovery::{DiscoveryOptions, DiscoveryReport, WorklistOrder, discover};
pub use link::{LinkKey, LinkSet, ProjectLink};
pub use merge::merge_graphs;
pub use node::{ManagedDetails, NativeDetails, ProjectFamily, ProjectNode};
pub use reconcile::reconcile;
pub use repository::{InsertOutcome, ProjectRepository};
pub use root::{RootGraph, RootKind};
pub use view::{GraphView, ViewNode};

pub use crate::descriptor::ExternalReference;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Root file not found: {path}")]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("Project {path} is recorded as {expected} but declares {declared}")]
    ConflictingIdentity {
        path: PathBuf,
        expected: Uuid,
        declared: Uuid,
    },

    #[error("Reference '{name}' matches more than one project: {}", candidates.join(", "))]
    AmbiguousName { name: String, candidates: Vec<String> },

    #[error("Unsupported root file type: {path} (expected .sln, .csproj or .vcxproj)")]
    UnsupportedRootType { path: PathBuf },

    #[error("Failed to resolve {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
