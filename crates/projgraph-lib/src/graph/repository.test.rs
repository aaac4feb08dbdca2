use super::*;
use crate::graph::node::ProjectFamily;
use std::path::PathBuf;

fn node(n: u128, path: &str, name: &str) -> ProjectNode {
    ProjectNode::new(Uuid::from_u128(n), path, name, ProjectFamily::Other)
}

#[test]
fn test_insert_new_identity() {
    let mut repository = ProjectRepository::new();
    assert_eq!(
        repository.insert(node(1, "/repo/A.csproj", "A")),
        InsertOutcome::Inserted
    );
    assert_eq!(repository.len(), 1);
    assert!(repository.contains(&Uuid::from_u128(1)));
}

#[test]
fn test_repeated_identity_merges_parent_links() {
    let mut repository = ProjectRepository::new();

    let mut via_a = node(3, "/repo/C.csproj", "C");
    via_a
        .parents_mut()
        .insert(ProjectLink::resolved("/repo/A.csproj", Uuid::from_u128(1)));
    let mut via_b = node(3, "/repo/x/../C.csproj", "C");
    via_b
        .parents_mut()
        .insert(ProjectLink::resolved("/repo/B.csproj", Uuid::from_u128(2)));

    repository.insert(via_a);
    assert_eq!(repository.insert(via_b), InsertOutcome::Merged);

    assert_eq!(repository.len(), 1);
    assert_eq!(repository.find_by_name("C").len(), 1);
    let merged = repository.get(&Uuid::from_u128(3)).unwrap();
    assert_eq!(merged.parents().len(), 2);
}

#[test]
fn test_name_lookup_is_case_insensitive() {
    let mut repository = ProjectRepository::new();
    repository.insert(node(1, "/repo/a/Foo.vcxproj", "Foo"));
    repository.insert(node(2, "/repo/b/Foo.vcxproj", "foo"));

    assert_eq!(repository.find_by_name("FOO").len(), 2);
    assert!(repository.find_by_name("Bar").is_empty());
}

#[test]
fn test_find_by_path_normalises() {
    let mut repository = ProjectRepository::new();
    repository.insert(node(1, "/repo/a/Foo.vcxproj", "Foo"));

    let found = repository.find_by_path(&PathBuf::from("/repo/b/../a/Foo.vcxproj"));
    assert_eq!(found.map(|n| n.id()), Some(Uuid::from_u128(1)));
}

#[test]
fn test_add_parent_link() {
    let mut repository = ProjectRepository::new();
    repository.insert(node(1, "/repo/A.csproj", "A"));

    let link = ProjectLink::resolved("/repo/B.csproj", Uuid::from_u128(2));
    assert!(repository.add_parent_link(&Uuid::from_u128(1), link.clone()));
    assert!(!repository.add_parent_link(&Uuid::from_u128(1), link.clone()));
    assert!(!repository.add_parent_link(&Uuid::from_u128(9), link));
}

#[test]
fn test_sorted_by_file_name_then_path() {
    let mut repository = ProjectRepository::new();
    repository.insert(node(1, "/repo/z/Beta.csproj", "Beta"));
    repository.insert(node(2, "/repo/b/Alpha.csproj", "Alpha2"));
    repository.insert(node(3, "/repo/a/Alpha.csproj", "Alpha1"));

    let order: Vec<&str> = repository
        .sorted_by_file_name()
        .into_iter()
        .map(|n| n.name())
        .collect();
    assert_eq!(order, vec!["Alpha1", "Alpha2", "Beta"]);
}
