//! Links between projects and the keyed sets that hold them

use super::node::ProjectNode;
use crate::descriptor::paths;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Equality key of a link: identity when known, otherwise the target path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkKey {
    Id(Uuid),
    Path(PathBuf),
}

/// A reference from one project to another project or to an external
/// artifact. Never mutated once built; rewrites go through [`LinkSet::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    target: PathBuf,
    id: Option<Uuid>,
    placeholder: bool,
}

impl ProjectLink {
    /// Link to a project whose identity is known
    pub fn resolved(path: impl Into<PathBuf>, id: Uuid) -> Self {
        Self {
            target: path.into(),
            id: Some(id),
            placeholder: false,
        }
    }

    /// Link written as a project reference; the referrer may have recorded
    /// the target's identity.
    pub fn declared(path: impl Into<PathBuf>, id: Option<Uuid>) -> Self {
        Self {
            target: path.into(),
            id,
            placeholder: false,
        }
    }

    /// Link derived from a raw library or assembly name
    pub fn placeholder(raw: impl Into<String>) -> Self {
        Self {
            target: PathBuf::from(raw.into()),
            id: None,
            placeholder: true,
        }
    }

    pub fn to_node(node: &ProjectNode) -> Self {
        Self::resolved(node.path(), node.id())
    }

    pub fn key(&self) -> LinkKey {
        match self.id {
            Some(id) => LinkKey::Id(id),
            None => LinkKey::Path(self.target.clone()),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_resolved(&self) -> bool {
        self.id.is_some() && !self.placeholder
    }

    /// Last segment of the target, as shown for unresolved leaves
    pub fn file_name(&self) -> String {
        paths::file_name_of(&self.target.to_string_lossy()).to_string()
    }

    /// Reconciliation key: file name with the extension stripped
    pub fn stem(&self) -> String {
        paths::file_stem_of(&self.target.to_string_lossy()).to_string()
    }
}

/// Set of links keyed by [`LinkKey`], iterated in key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: BTreeMap<LinkKey, ProjectLink>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless a link with the same key is present. Returns whether the
    /// set changed.
    pub fn insert(&mut self, link: ProjectLink) -> bool {
        let key = link.key();
        if self.links.contains_key(&key) {
            return false;
        }
        self.links.insert(key, link);
        true
    }

    /// Insert a placeholder for a raw library name unless an alias of it is
    /// already present: `Foo`, `Foo.lib` and the literal declared path denote
    /// one target. Stems compare case-insensitively, like the name index.
    pub fn insert_library(&mut self, raw: &str) -> bool {
        let stem = paths::file_stem_of(raw).to_lowercase();
        let aliased = self.links.contains_key(&LinkKey::Path(PathBuf::from(raw)))
            || self
                .placeholders()
                .any(|link| link.stem().to_lowercase() == stem);

        if aliased {
            return false;
        }
        self.insert(ProjectLink::placeholder(raw))
    }

    /// Keep only the links for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&ProjectLink) -> bool) {
        self.links.retain(|_, link| keep(link));
    }

    pub fn union(&mut self, other: &LinkSet) {
        for link in other.iter() {
            self.insert(link.clone());
        }
    }

    /// Remove `old` and insert `new`. If `new` is already present the set
    /// just loses `old`.
    pub fn replace(&mut self, old: &LinkKey, new: ProjectLink) {
        self.links.remove(old);
        self.insert(new);
    }

    pub fn contains_key(&self, key: &LinkKey) -> bool {
        self.links.contains_key(key)
    }

    pub fn get(&self, key: &LinkKey) -> Option<&ProjectLink> {
        self.links.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectLink> {
        self.links.values()
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &ProjectLink> {
        self.iter().filter(|link| link.is_placeholder())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<ProjectLink> for LinkSet {
    fn from_iter<T: IntoIterator<Item = ProjectLink>>(iter: T) -> Self {
        let mut set = LinkSet::new();
        for link in iter {
            set.insert(link);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    include!("link.test.rs");
}
