use super::*;
use tempfile::TempDir;

#[test]
fn test_open_solution_and_projects() {
    let dir = TempDir::new().unwrap();
    for name in ["All.sln", "App.csproj", "Engine.VCXPROJ"] {
        std::fs::write(dir.path().join(name), "").unwrap();
    }

    let solution = RootGraph::open(&dir.path().join("All.sln"), None).unwrap();
    assert_eq!(solution.kind, RootKind::Solution);
    assert_eq!(solution.name, "All.sln");
    assert!(solution.repository.is_empty());

    let project = RootGraph::open(&dir.path().join("App.csproj"), Some(3)).unwrap();
    assert_eq!(project.kind, RootKind::Project);
    assert_eq!(project.search_depth, Some(3));

    let native = RootGraph::open(&dir.path().join("Engine.VCXPROJ"), None).unwrap();
    assert_eq!(native.kind, RootKind::Project);
}

#[test]
fn test_missing_root_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = RootGraph::open(&dir.path().join("Nope.sln"), None).unwrap_err();
    assert!(matches!(err, GraphError::NotFound { .. }));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Build.fsproj");
    std::fs::write(&path, "<Project/>").unwrap();

    let err = RootGraph::open(&path, None).unwrap_err();
    assert!(matches!(err, GraphError::UnsupportedRootType { .. }));
}
