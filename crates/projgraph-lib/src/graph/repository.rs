use super::link::ProjectLink;
use super::node::ProjectNode;
use crate::descriptor::paths;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::trace;
use uuid::Uuid;

/// Result of [`ProjectRepository::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Identity already present; link sets were unioned into the stored node
    Merged,
}

/// Identity-keyed store of discovered projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRepository {
    nodes: BTreeMap<Uuid, ProjectNode>,
    names: HashMap<String, Vec<Uuid>>,
}

impl ProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or union its links into the node that already holds
    /// its identity.
    pub fn insert(&mut self, node: ProjectNode) -> InsertOutcome {
        if let Some(existing) = self.nodes.get_mut(&node.id()) {
            trace!(id = %node.id(), name = node.name(), "Merging repeated project");
            existing.absorb(&node);
            return InsertOutcome::Merged;
        }

        self.names
            .entry(node.name().to_lowercase())
            .or_default()
            .push(node.id());
        self.nodes.insert(node.id(), node);
        InsertOutcome::Inserted
    }

    pub fn get(&self, id: &Uuid) -> Option<&ProjectNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut ProjectNode> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.nodes.contains_key(id)
    }

    /// Identities registered under a display name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> &[Uuid] {
        self.names
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn find_by_path(&self, path: &Path) -> Option<&ProjectNode> {
        let wanted = paths::normalize(path);
        self.nodes.values().find(|node| node.path() == wanted)
    }

    pub fn add_parent_link(&mut self, id: &Uuid, link: ProjectLink) -> bool {
        self.nodes
            .get_mut(id)
            .map(|node| node.parents_mut().insert(link))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.nodes.keys().copied().collect()
    }

    /// Nodes in identity order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectNode> {
        self.nodes.values()
    }

    /// Nodes ordered by file name, then full path
    pub fn sorted_by_file_name(&self) -> Vec<&ProjectNode> {
        let mut nodes: Vec<&ProjectNode> = self.nodes.values().collect();
        nodes.sort_by(|a, b| {
            a.file_name()
                .cmp(&b.file_name())
                .then_with(|| a.path().cmp(b.path()))
        });
        nodes
    }
}

#[cfg(test)]
mod tests {
    include!("repository.test.rs");
}
