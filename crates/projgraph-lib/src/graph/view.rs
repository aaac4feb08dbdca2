//! Read-only petgraph projection of a [`RootGraph`]
//!
//! Vertices are discovered projects plus one vertex per unresolved link
//! target; edges run from referrer to referenced along child links.

use super::link::LinkKey;
use super::root::RootGraph;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, EdgeRef, VisitMap, Visitable};
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Project(Uuid),
    /// A link target that is not a discovered project, labelled by file name
    External { key: LinkKey, label: String },
}

#[derive(Debug)]
pub struct GraphView {
    graph: DiGraph<ViewNode, ()>,
    index: HashMap<LinkKey, NodeIndex>,
}

impl GraphView {
    pub fn build(root: &RootGraph) -> Self {
        let mut view = GraphView {
            graph: DiGraph::new(),
            index: HashMap::new(),
        };

        let nodes = root.repository.sorted_by_file_name();
        for node in &nodes {
            let key = LinkKey::Id(node.id());
            let index = view.graph.add_node(ViewNode::Project(node.id()));
            view.index.insert(key, index);
        }

        for node in &nodes {
            let from = view.index[&LinkKey::Id(node.id())];
            for link in node.children().iter() {
                let key = link.key();
                let to = match view.index.get(&key) {
                    Some(&index) => index,
                    None => {
                        let index = view.graph.add_node(ViewNode::External {
                            key: key.clone(),
                            label: link.file_name(),
                        });
                        view.index.insert(key, index);
                        index
                    }
                };
                view.graph.update_edge(from, to, ());
            }
        }

        view
    }

    pub fn graph(&self) -> &DiGraph<ViewNode, ()> {
        &self.graph
    }

    pub fn node(&self, index: NodeIndex) -> &ViewNode {
        &self.graph[index]
    }

    pub fn index_of(&self, id: Uuid) -> Option<NodeIndex> {
        self.index.get(&LinkKey::Id(id)).copied()
    }

    /// Vertices reachable along child edges, excluding `id` itself
    pub fn descendants(&self, id: Uuid) -> Vec<NodeIndex> {
        let Some(start) = self.index_of(id) else {
            return Vec::new();
        };
        let mut bfs = Bfs::new(&self.graph, start);
        let mut found = Vec::new();
        while let Some(index) = bfs.next(&self.graph) {
            if index != start {
                found.push(index);
            }
        }
        found
    }

    /// Vertices that reach `id` along child edges
    pub fn ancestors(&self, id: Uuid) -> Vec<NodeIndex> {
        let Some(start) = self.index_of(id) else {
            return Vec::new();
        };
        let mut visited = self.graph.visit_map();
        visited.visit(start);
        let mut queue = VecDeque::from([start]);
        let mut found = Vec::new();
        while let Some(index) = queue.pop_front() {
            for parent in self.graph.neighbors_directed(index, Direction::Incoming) {
                if visited.visit(parent) {
                    found.push(parent);
                    queue.push_back(parent);
                }
            }
        }
        found
    }

    /// Edges `(from, to)` whose endpoints both lie in `vertices`
    pub fn edges_within(&self, vertices: &[NodeIndex]) -> Vec<(NodeIndex, NodeIndex)> {
        let mut edges = Vec::new();
        for &from in vertices {
            for edge in self.graph.edges_directed(from, Direction::Outgoing) {
                if vertices.contains(&edge.target()) {
                    edges.push((from, edge.target()));
                }
            }
        }
        edges
    }

    /// Outgoing edges of `index`
    pub fn children_of(&self, index: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| edge.target())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    include!("view.test.rs");
}
