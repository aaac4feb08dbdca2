use super::*;
use crate::graph::node::{ProjectFamily, ProjectNode};
use crate::graph::root::RootKind;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn node(n: u128, path: &str, name: &str, children: &[u128]) -> ProjectNode {
    let mut node = ProjectNode::new(uid(n), path, name, ProjectFamily::Other);
    for child in children {
        node.children_mut()
            .insert(ProjectLink::resolved(format!("/q/{child}.csproj"), uid(*child)));
    }
    node
}

fn primary() -> RootGraph {
    let mut graph = RootGraph::new("/p/P.vcxproj", RootKind::Project, None);
    let mut p = node(1, "/p/P.vcxproj", "P", &[]);
    p.children_mut().insert_library("Shared.lib");
    p.children_mut().insert_library("kernel32.lib");
    graph.repository.insert(p);
    graph
}

fn secondary() -> RootGraph {
    let mut graph = RootGraph::new("/q/Q.vcxproj", RootKind::Project, None);
    graph.repository.insert(node(10, "/q/Q.vcxproj", "Q", &[11]));
    graph.repository.insert(node(11, "/q/Shared.vcxproj", "Shared", &[12, 13]));
    graph.repository.insert(node(12, "/q/Left.vcxproj", "Left", &[]));
    graph.repository.insert(node(13, "/q/Right.vcxproj", "Right", &[12]));
    graph
}

#[test]
fn test_merge_imports_match_and_descendants() {
    let mut primary = primary();
    let imported = merge_graphs(&mut primary, &[secondary()]).unwrap();

    assert_eq!(imported, 3);
    assert_eq!(primary.repository.len(), 4);
    for id in [11, 12, 13] {
        assert!(primary.repository.contains(&uid(id)));
    }
    // ancestors of the match are not imported
    assert!(!primary.repository.contains(&uid(10)));

    let p = primary.repository.get(&uid(1)).unwrap();
    assert!(p.children().get(&LinkKey::Id(uid(11))).unwrap().is_resolved());
    assert_eq!(p.children().placeholders().count(), 1);

    let shared = primary.repository.get(&uid(11)).unwrap();
    assert!(shared.parents().contains_key(&LinkKey::Id(uid(1))));
}

#[test]
fn test_merge_drops_parent_links_to_ancestors_left_behind() {
    let mut primary = primary();
    let mut other = secondary();
    let shared = other.repository.get_mut(&uid(11)).unwrap();
    shared
        .parents_mut()
        .insert(ProjectLink::resolved("/q/Q.vcxproj", uid(10)));
    let right = other.repository.get_mut(&uid(13)).unwrap();
    right
        .parents_mut()
        .insert(ProjectLink::resolved("/q/Shared.vcxproj", uid(11)));

    merge_graphs(&mut primary, &[other]).unwrap();

    let shared = primary.repository.get(&uid(11)).unwrap();
    assert!(shared.parents().contains_key(&LinkKey::Id(uid(1))));
    assert!(!shared.parents().contains_key(&LinkKey::Id(uid(10))));
    assert_eq!(shared.parents().len(), 1);

    // links inside the imported closure survive
    let right = primary.repository.get(&uid(13)).unwrap();
    assert!(right.parents().contains_key(&LinkKey::Id(uid(11))));

    for node in primary.repository.iter() {
        for parent in node.parents().iter() {
            let parent = parent.id().unwrap();
            assert!(primary.repository.contains(&parent), "dangling parent {parent}");
        }
    }
}

#[test]
fn test_merge_without_match_leaves_placeholder() {
    let mut primary = primary();
    let mut other = RootGraph::new("/z/Z.vcxproj", RootKind::Project, None);
    other.repository.insert(node(20, "/z/Z.vcxproj", "Z", &[]));

    assert_eq!(merge_graphs(&mut primary, &[other]).unwrap(), 0);
    assert_eq!(primary.repository.len(), 1);
    let p = primary.repository.get(&uid(1)).unwrap();
    assert_eq!(p.children().placeholders().count(), 2);
}

#[test]
fn test_merge_ambiguous_name_in_one_secondary_is_fatal() {
    let mut primary = primary();
    let mut other = secondary();
    other
        .repository
        .insert(node(30, "/q/other/Shared.vcxproj", "Shared", &[]));

    let err = merge_graphs(&mut primary, &[other]).unwrap_err();
    assert!(matches!(err, GraphError::AmbiguousName { .. }));
}

#[test]
fn test_first_secondary_wins() {
    let mut primary = primary();
    let mut first = RootGraph::new("/f/F.vcxproj", RootKind::Project, None);
    first
        .repository
        .insert(node(40, "/f/Shared.vcxproj", "Shared", &[]));

    merge_graphs(&mut primary, &[first, secondary()]).unwrap();

    let p = primary.repository.get(&uid(1)).unwrap();
    assert!(p.children().contains_key(&LinkKey::Id(uid(40))));
    assert!(!primary.repository.contains(&uid(11)));
}

#[test]
fn test_import_is_cycle_safe() {
    let mut source = ProjectRepository::new();
    source.insert(node(1, "/q/1.csproj", "One", &[2]));
    source.insert(node(2, "/q/2.csproj", "Two", &[3]));
    source.insert(node(3, "/q/3.csproj", "Three", &[1]));

    let mut target = ProjectRepository::new();
    assert_eq!(import_descendants(&mut target, &source, uid(2)), 3);
    assert_eq!(target.len(), 3);
}
