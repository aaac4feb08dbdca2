use super::*;
use crate::graph::node::{ProjectFamily, ProjectNode};
use std::path::PathBuf;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn node(n: u128, path: &str, name: &str) -> ProjectNode {
    ProjectNode::new(uid(n), path, name, ProjectFamily::Other)
}

fn app_linking(raw: &str) -> ProjectNode {
    let mut app = node(1, "/s/App/App.vcxproj", "App");
    app.children_mut().insert_library(raw);
    app
}

#[test]
fn test_library_placeholder_resolves_to_single_project() {
    let mut repository = ProjectRepository::new();
    repository.insert(app_linking("Foo.lib"));
    repository.insert(node(2, "/s/Foo/Foo.vcxproj", "Foo"));

    assert_eq!(reconcile(&mut repository).unwrap(), 1);

    let app = repository.get(&uid(1)).unwrap();
    let link = app.children().get(&LinkKey::Id(uid(2))).unwrap();
    assert!(link.is_resolved());
    assert_eq!(link.target(), PathBuf::from("/s/Foo/Foo.vcxproj"));
    assert_eq!(app.children().placeholders().count(), 0);

    let foo = repository.get(&uid(2)).unwrap();
    assert!(foo.parents().contains_key(&LinkKey::Id(uid(1))));
}

#[test]
fn test_placeholder_lookup_ignores_case() {
    let mut repository = ProjectRepository::new();
    repository.insert(app_linking("..\\out\\FOO.LIB"));
    repository.insert(node(2, "/s/Foo/Foo.vcxproj", "Foo"));

    reconcile(&mut repository).unwrap();
    assert!(
        repository
            .get(&uid(1))
            .unwrap()
            .children()
            .contains_key(&LinkKey::Id(uid(2)))
    );
}

#[test]
fn test_ambiguous_placeholder_is_fatal() {
    let mut repository = ProjectRepository::new();
    repository.insert(app_linking("Foo.lib"));
    repository.insert(node(2, "/s/a/Foo.vcxproj", "Foo"));
    repository.insert(node(3, "/s/b/Foo.vcxproj", "Foo"));

    match reconcile(&mut repository).unwrap_err() {
        GraphError::AmbiguousName { name, candidates } => {
            assert_eq!(name, "Foo");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unmatched_placeholder_stays_external() {
    let mut repository = ProjectRepository::new();
    repository.insert(app_linking("kernel32.lib"));

    assert_eq!(reconcile(&mut repository).unwrap(), 0);
    assert_eq!(repository.len(), 1);
    let app = repository.get(&uid(1)).unwrap();
    assert_eq!(app.children().placeholders().count(), 1);
}

#[test]
fn test_declared_link_without_identity_is_upgraded() {
    let mut repository = ProjectRepository::new();
    let mut app = node(1, "/s/App/App.csproj", "App");
    app.children_mut()
        .insert(ProjectLink::declared("/s/Core/Core.csproj", None));
    repository.insert(app);
    repository.insert(node(2, "/s/Core/Core.csproj", "Core"));

    assert_eq!(reconcile(&mut repository).unwrap(), 1);
    let app = repository.get(&uid(1)).unwrap();
    assert!(app.children().contains_key(&LinkKey::Id(uid(2))));
    assert!(
        !app.children()
            .contains_key(&LinkKey::Path(PathBuf::from("/s/Core/Core.csproj")))
    );
}

#[test]
fn test_declared_link_to_missing_project_is_kept() {
    let mut repository = ProjectRepository::new();
    let mut app = node(1, "/s/App/App.csproj", "App");
    app.children_mut()
        .insert(ProjectLink::declared("/s/Gone/Gone.csproj", None));
    repository.insert(app);

    assert_eq!(reconcile(&mut repository).unwrap(), 0);
}

#[test]
fn test_reconcile_is_idempotent() {
    let mut repository = ProjectRepository::new();
    repository.insert(app_linking("Foo.lib"));
    repository.insert(node(2, "/s/Foo/Foo.vcxproj", "Foo"));

    reconcile(&mut repository).unwrap();
    let once = repository.clone();
    assert_eq!(reconcile(&mut repository).unwrap(), 0);
    assert_eq!(repository, once);
}
