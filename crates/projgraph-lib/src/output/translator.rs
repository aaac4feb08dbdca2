use super::yuml::{Association, YumlClass, YumlDiagram};
use crate::descriptor::ExternalReference;
use crate::graph::{GraphView, ProjectFamily, ProjectNode, RootGraph, ViewNode};
use petgraph::graph::NodeIndex;
use tracing::trace;
use uuid::Uuid;

/// Builds yUML diagrams from a finished [`RootGraph`]
pub struct DiagramTranslator<'a> {
    root: &'a RootGraph,
    view: GraphView,
}

impl<'a> DiagramTranslator<'a> {
    pub fn new(root: &'a RootGraph) -> Self {
        Self {
            root,
            view: GraphView::build(root),
        }
    }

    pub fn root(&self) -> &RootGraph {
        self.root
    }

    /// Every project with its direct children and external references
    pub fn whole_graph(&self) -> YumlDiagram {
        let mut diagram = YumlDiagram::new();
        for node in self.root.repository.sorted_by_file_name() {
            self.add_direct(&mut diagram, node);
        }
        trace!(relationships = diagram.relationship_count(), "Translated whole graph");
        diagram
    }

    /// `id` and everything it transitively references
    pub fn dependencies(&self, id: Uuid) -> YumlDiagram {
        let mut diagram = YumlDiagram::new();
        let Some(node) = self.root.repository.get(&id) else {
            return diagram;
        };
        self.add_direct(&mut diagram, node);
        for index in self.view.descendants(id) {
            if let ViewNode::Project(child) = self.view.node(index) {
                if let Some(child) = self.root.repository.get(child) {
                    self.add_direct(&mut diagram, child);
                }
            }
        }
        diagram
    }

    /// `id` and every project that transitively references it
    pub fn parents(&self, id: Uuid) -> YumlDiagram {
        let mut diagram = YumlDiagram::new();
        let Some(start) = self.view.index_of(id) else {
            return diagram;
        };
        let mut vertices = vec![start];
        vertices.extend(self.view.ancestors(id));
        for (from, to) in self.view.edges_within(&vertices) {
            diagram.associate(Association {
                parent: self.class_for_vertex(from),
                child: self.class_for_vertex(to),
            });
        }
        diagram
    }

    fn add_direct(&self, diagram: &mut YumlDiagram, node: &ProjectNode) {
        let parent = class_for_node(node);
        if let Some(index) = self.view.index_of(node.id()) {
            for child in self.view.children_of(index) {
                diagram.associate(Association {
                    parent: parent.clone(),
                    child: self.class_for_vertex(child),
                });
            }
        }
        for reference in node.references() {
            diagram.associate(Association {
                parent: parent.clone(),
                child: class_for_reference(reference),
            });
        }
    }

    fn class_for_vertex(&self, index: NodeIndex) -> YumlClass {
        match self.view.node(index) {
            ViewNode::Project(id) => match self.root.repository.get(id) {
                Some(node) => class_for_node(node),
                None => YumlClass::new(id.to_string()),
            },
            ViewNode::External { label, .. } => YumlClass::new(label.as_str()),
        }
    }
}

pub fn class_for_node(node: &ProjectNode) -> YumlClass {
    let class = YumlClass::new(node.name());
    match node.family() {
        ProjectFamily::Managed(details) => match &details.framework {
            Some(framework) => class.with_note(format!(".Net Version: {framework}")),
            None => class.with_note("C#"),
        },
        ProjectFamily::Native(details) => {
            let mut class = class.with_note(format!(
                "Type: {}",
                details.configuration_type.as_deref().unwrap_or("Unknown")
            ));
            if let Some(standard) = &details.language_standard {
                class = class.with_note(format!("C++ version: {standard}"));
            }
            class
                .with_note(format!("Is MFC: {}", details.uses_mfc))
                .with_note(format!("Is C++/CLI: {}", details.is_managed_interop))
        }
        ProjectFamily::Other => class,
    }
}

pub fn class_for_reference(reference: &ExternalReference) -> YumlClass {
    let note = match &reference.version {
        Some(version) => format!("External Reference ({version})"),
        None => "External Reference".to_string(),
    };
    YumlClass::new(reference.assembly_name.as_str()).with_note(note)
}

#[cfg(test)]
mod tests {
    include!("translator.test.rs");
}
