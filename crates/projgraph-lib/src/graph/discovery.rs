//! Worklist-driven project discovery
//!
//! Starting from the manifest entries (or a single project file), every
//! declared project reference is investigated exactly once. A target path
//! moves from unseen to queued to resolved (or skipped) and never goes back,
//! so the loop terminates on any reference graph, cycles included.

use super::GraphError;
use super::link::ProjectLink;
use super::node::ProjectNode;
use super::repository::ProjectRepository;
use super::root::{RootGraph, RootKind};
use crate::descriptor::{DescriptorError, DescriptorReader};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Order in which queued items are taken. The resulting graph is the same
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorklistOrder {
    #[default]
    Fifo,
    Lifo,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryOptions {
    pub include_external_references: bool,
    pub order: WorklistOrder,
}

/// Counters reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub investigated: usize,
    pub created: usize,
    pub missing: usize,
}

#[derive(Debug)]
struct InvestigationItem {
    target: PathBuf,
    expected: Option<Uuid>,
    origins: Vec<ProjectLink>,
}

struct DiscoveryEngine<'a, R> {
    reader: &'a mut R,
    repository: &'a mut ProjectRepository,
    options: DiscoveryOptions,
    root_file: Option<PathBuf>,
    queue: VecDeque<PathBuf>,
    pending: HashMap<PathBuf, InvestigationItem>,
    resolved: HashMap<PathBuf, Uuid>,
    missing: HashSet<PathBuf>,
    report: DiscoveryReport,
}

/// Populate `graph.repository` from its root file
pub fn discover<R: DescriptorReader>(
    graph: &mut RootGraph,
    reader: &mut R,
    options: DiscoveryOptions,
) -> Result<DiscoveryReport, GraphError> {
    let span = crate::progress_span!("discover");
    let _enter = span.enter();

    if let Some(depth) = graph.search_depth {
        debug!(depth, "Search depth recorded; discovery runs to a fixed point");
    }

    let mut engine = DiscoveryEngine {
        reader,
        repository: &mut graph.repository,
        options,
        root_file: None,
        queue: VecDeque::new(),
        pending: HashMap::new(),
        resolved: HashMap::new(),
        missing: HashSet::new(),
        report: DiscoveryReport::default(),
    };

    match graph.kind {
        RootKind::Solution => {
            for entry in engine.reader.manifest(&graph.root_file)? {
                trace!(project = %entry.name, id = %entry.id, "Seeding from manifest");
                engine.enqueue(entry.path, Some(entry.id), None)?;
            }
        }
        RootKind::Project => {
            engine.root_file = Some(graph.root_file.clone());
            engine.enqueue(graph.root_file.clone(), None, None)?;
        }
    }

    engine.run()?;
    let report = engine.report;

    debug!(
        root = %graph.name,
        projects = graph.repository.len(),
        investigated = report.investigated,
        missing = report.missing,
        "Discovery complete"
    );
    Ok(report)
}

/// Reconcile the identity a referrer or manifest recorded with the one the
/// descriptor declares.
pub fn resolve_identity(
    path: &Path,
    expected: Option<Uuid>,
    declared: Option<Uuid>,
) -> Result<Uuid, GraphError> {
    match (expected, declared) {
        (Some(expected), Some(declared)) if expected != declared => {
            Err(GraphError::ConflictingIdentity {
                path: path.to_path_buf(),
                expected,
                declared,
            })
        }
        (_, Some(id)) | (Some(id), None) => Ok(id),
        (None, None) => Ok(fallback_identity(path)),
    }
}

/// Stable identity for projects that declare none: UUID v5 of the path
pub fn fallback_identity(path: &Path) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, path.to_string_lossy().as_bytes())
}

impl<R: DescriptorReader> DiscoveryEngine<'_, R> {
    fn enqueue(
        &mut self,
        target: PathBuf,
        expected: Option<Uuid>,
        origin: Option<ProjectLink>,
    ) -> Result<(), GraphError> {
        if let Some(&id) = self.resolved.get(&target) {
            if let Some(expected) = expected {
                resolve_identity(&target, Some(expected), Some(id))?;
            }
            if let Some(origin) = origin {
                self.repository.add_parent_link(&id, origin);
            }
            return Ok(());
        }

        if self.missing.contains(&target) {
            return Ok(());
        }

        if let Some(item) = self.pending.get_mut(&target) {
            match (item.expected, expected) {
                (Some(recorded), Some(incoming)) if recorded != incoming => {
                    return Err(GraphError::ConflictingIdentity {
                        path: target,
                        expected: recorded,
                        declared: incoming,
                    });
                }
                (None, Some(incoming)) => item.expected = Some(incoming),
                _ => {}
            }
            item.origins.extend(origin);
            return Ok(());
        }

        self.queue.push_back(target.clone());
        self.pending.insert(
            target.clone(),
            InvestigationItem {
                target,
                expected,
                origins: origin.into_iter().collect(),
            },
        );
        Ok(())
    }

    fn next(&mut self) -> Option<InvestigationItem> {
        let target = match self.options.order {
            WorklistOrder::Fifo => self.queue.pop_front(),
            WorklistOrder::Lifo => self.queue.pop_back(),
        }?;
        self.pending.remove(&target)
    }

    fn run(&mut self) -> Result<(), GraphError> {
        while let Some(item) = self.next() {
            self.report.investigated += 1;
            self.investigate(item)?;
        }
        Ok(())
    }

    fn investigate(&mut self, item: InvestigationItem) -> Result<(), GraphError> {
        let is_root = self.root_file.as_deref() == Some(item.target.as_path());

        if let Some(expected) = item.expected.filter(|id| self.repository.contains(id)) {
            trace!(path = %item.target.display(), id = %expected, "Identity already discovered");
            self.attach(item.target, expected, item.origins);
            return Ok(());
        }

        let descriptor = match self.reader.read(&item.target) {
            Ok(descriptor) => descriptor,
            Err(DescriptorError::NotFound { .. }) => return self.skip_missing(item, is_root),
            Err(e) => return Err(e.into()),
        };

        let id = resolve_identity(&item.target, item.expected, descriptor.identity)?;
        if self.repository.contains(&id) {
            self.attach(item.target, id, item.origins);
            return Ok(());
        }

        let mut node = ProjectNode::from_descriptor(
            id,
            &item.target,
            &descriptor,
            self.options.include_external_references,
        );
        for origin in item.origins {
            node.parents_mut().insert(origin);
        }
        trace!(
            path = %item.target.display(),
            id = %id,
            name = node.name(),
            references = descriptor.project_references.len(),
            "Discovered project"
        );

        // Insert before following references so a self or cyclic reference
        // finds the node in place.
        self.repository.insert(node);
        self.resolved.insert(item.target.clone(), id);
        self.report.created += 1;

        let origin = ProjectLink::resolved(item.target, id);
        for reference in &descriptor.project_references {
            self.enqueue(reference.path.clone(), reference.id, Some(origin.clone()))?;
        }
        Ok(())
    }

    fn attach(&mut self, target: PathBuf, id: Uuid, origins: Vec<ProjectLink>) {
        for origin in origins {
            self.repository.add_parent_link(&id, origin);
        }
        self.resolved.insert(target, id);
    }

    fn skip_missing(&mut self, item: InvestigationItem, is_root: bool) -> Result<(), GraphError> {
        if is_root {
            return Err(GraphError::NotFound { path: item.target });
        }
        warn!(
            path = %item.target.display(),
            referrers = item.origins.len(),
            "Referenced project not found, keeping it as an external leaf"
        );
        self.report.missing += 1;
        self.missing.insert(item.target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("discovery.test.rs");
}
