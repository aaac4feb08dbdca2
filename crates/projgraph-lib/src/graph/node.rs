use super::link::{LinkSet, ProjectLink};
use crate::descriptor::{Descriptor, DescriptorMetadata, ExternalReference, paths};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedDetails {
    /// Target framework, e.g. `v4.8` or `net8.0`
    pub framework: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeDetails {
    pub configuration_type: Option<String>,
    pub language_standard: Option<String>,
    pub uses_mfc: bool,
    pub is_managed_interop: bool,
}

/// Project family, chosen by descriptor extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFamily {
    Managed(ManagedDetails),
    Native(NativeDetails),
    Other,
}

impl ProjectFamily {
    pub fn detect(path: &Path, metadata: &DescriptorMetadata) -> Self {
        match paths::extension_of(path).as_deref() {
            Some("csproj") => ProjectFamily::Managed(ManagedDetails {
                framework: metadata.framework.clone(),
            }),
            Some("vcxproj") => ProjectFamily::Native(NativeDetails {
                configuration_type: metadata.configuration_type.clone(),
                language_standard: metadata.language_standard.clone(),
                uses_mfc: metadata.uses_mfc,
                is_managed_interop: metadata.is_managed_interop,
            }),
            _ => ProjectFamily::Other,
        }
    }
}

/// One discovered project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    id: Uuid,
    path: PathBuf,
    name: String,
    family: ProjectFamily,
    children: LinkSet,
    parents: LinkSet,
    references: BTreeSet<ExternalReference>,
}

impl ProjectNode {
    pub fn new(id: Uuid, path: impl Into<PathBuf>, name: impl Into<String>, family: ProjectFamily) -> Self {
        Self {
            id,
            path: path.into(),
            name: name.into(),
            family,
            children: LinkSet::new(),
            parents: LinkSet::new(),
            references: BTreeSet::new(),
        }
    }

    /// Build a node from its parsed descriptor. Declared project references
    /// become child links, raw library names become placeholders.
    pub fn from_descriptor(
        id: Uuid,
        path: &Path,
        descriptor: &Descriptor,
        include_external_references: bool,
    ) -> Self {
        let name = descriptor
            .name
            .clone()
            .unwrap_or_else(|| paths::file_stem_of(&path.to_string_lossy()).to_string());
        let family = ProjectFamily::detect(path, &descriptor.metadata);
        let mut node = ProjectNode::new(id, path, name, family);

        for reference in &descriptor.project_references {
            node.children
                .insert(ProjectLink::declared(reference.path.clone(), reference.id));
        }
        for library in &descriptor.libraries {
            node.children.insert_library(library);
        }
        if include_external_references {
            node.references
                .extend(descriptor.external_references.iter().cloned());
        }

        node
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_name(&self) -> String {
        paths::file_name_of(&self.path.to_string_lossy()).to_string()
    }

    pub fn family(&self) -> &ProjectFamily {
        &self.family
    }

    pub fn children(&self) -> &LinkSet {
        &self.children
    }

    pub fn parents(&self) -> &LinkSet {
        &self.parents
    }

    pub fn references(&self) -> &BTreeSet<ExternalReference> {
        &self.references
    }

    pub fn children_mut(&mut self) -> &mut LinkSet {
        &mut self.children
    }

    pub fn parents_mut(&mut self) -> &mut LinkSet {
        &mut self.parents
    }

    pub fn add_reference(&mut self, reference: ExternalReference) {
        self.references.insert(reference);
    }

    /// Union another observation of the same project into this one
    pub(crate) fn absorb(&mut self, other: &ProjectNode) {
        self.children.union(&other.children);
        self.parents.union(&other.parents);
    }
}

#[cfg(test)]
mod tests {
    include!("node.test.rs");
}
