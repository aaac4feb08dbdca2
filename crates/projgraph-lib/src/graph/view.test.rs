use super::*;
use crate::graph::link::ProjectLink;
use crate::graph::node::{ProjectFamily, ProjectNode};
use crate::graph::root::RootKind;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// A -> B -> C -> A, plus B -> kernel32.lib
fn cyclic() -> RootGraph {
    let mut root = RootGraph::new("/v/A.vcxproj", RootKind::Project, None);
    let edges = [(1, 2), (2, 3), (3, 1)];
    for n in 1..=3u128 {
        let mut node = ProjectNode::new(uid(n), format!("/v/{n}.vcxproj"), format!("P{n}"), ProjectFamily::Other);
        for (from, to) in edges {
            if from == n {
                node.children_mut()
                    .insert(ProjectLink::resolved(format!("/v/{to}.vcxproj"), uid(to)));
            }
        }
        if n == 2 {
            node.children_mut().insert_library("kernel32.lib");
        }
        root.repository.insert(node);
    }
    root
}

fn ids(view: &GraphView, indices: Vec<NodeIndex>) -> Vec<ViewNode> {
    indices.into_iter().map(|i| view.node(i).clone()).collect()
}

#[test]
fn test_view_has_projects_and_external_leaves() {
    let view = GraphView::build(&cyclic());
    assert_eq!(view.graph().node_count(), 4);
    assert_eq!(view.graph().edge_count(), 4);
}

#[test]
fn test_descendants_are_cycle_safe() {
    let view = GraphView::build(&cyclic());
    let found = ids(&view, view.descendants(uid(1)));

    assert_eq!(found.len(), 3);
    assert!(found.contains(&ViewNode::Project(uid(2))));
    assert!(found.contains(&ViewNode::Project(uid(3))));
    assert!(found.iter().any(|n| matches!(n, ViewNode::External { label, .. } if label == "kernel32.lib")));
}

#[test]
fn test_ancestors_follow_incoming_edges() {
    let view = GraphView::build(&cyclic());
    let found = ids(&view, view.ancestors(uid(3)));
    assert_eq!(found.len(), 2);
    assert!(found.contains(&ViewNode::Project(uid(1))));
    assert!(found.contains(&ViewNode::Project(uid(2))));
}

#[test]
fn test_unknown_identity_has_no_relatives() {
    let view = GraphView::build(&cyclic());
    assert!(view.descendants(uid(99)).is_empty());
    assert!(view.ancestors(uid(99)).is_empty());
}

#[test]
fn test_edges_within_subset() {
    let view = GraphView::build(&cyclic());
    let a = view.index_of(uid(1)).unwrap();
    let b = view.index_of(uid(2)).unwrap();
    assert_eq!(view.edges_within(&[a, b]), vec![(a, b)]);
    assert_eq!(view.children_of(b).len(), 2);
}
