use super::*;
use crate::descriptor::{
    CachedReader, DeclaredReference, Descriptor, ManifestEntry, MsBuildReader,
};
use crate::graph::link::LinkKey;
use crate::testing::{MemoryReader, ProjectXml, TempDirFixture};

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn project(id: Option<u128>, references: &[(&str, Option<u128>)]) -> Descriptor {
    Descriptor {
        identity: id.map(uid),
        project_references: references
            .iter()
            .map(|(path, id)| DeclaredReference {
                path: PathBuf::from(path),
                id: id.map(uid),
            })
            .collect(),
        ..Descriptor::default()
    }
}

fn run(reader: &mut MemoryReader, root: &str, order: WorklistOrder) -> Result<RootGraph, GraphError> {
    let mut graph = RootGraph::new(root, RootKind::Project, None);
    discover(
        &mut graph,
        reader,
        DiscoveryOptions {
            order,
            ..DiscoveryOptions::default()
        },
    )?;
    Ok(graph)
}

fn diamond() -> MemoryReader {
    MemoryReader::new()
        .with_project("/s/A.csproj", project(Some(1), &[("/s/B.csproj", Some(2)), ("/s/C.csproj", Some(3))]))
        .with_project("/s/B.csproj", project(Some(2), &[("/s/D.csproj", Some(4))]))
        .with_project("/s/C.csproj", project(Some(3), &[("/s/x/../D.csproj", None)]))
        .with_project("/s/D.csproj", project(Some(4), &[]))
}

#[test]
fn test_diamond_creates_one_node_with_both_parents() {
    let mut reader = diamond();
    let graph = run(&mut reader, "/s/A.csproj", WorklistOrder::Fifo).unwrap();

    assert_eq!(graph.repository.len(), 4);
    let d = graph.repository.get(&uid(4)).unwrap();
    assert_eq!(d.parents().len(), 2);
    assert!(d.parents().contains_key(&LinkKey::Id(uid(2))));
    assert!(d.parents().contains_key(&LinkKey::Id(uid(3))));
    assert_eq!(reader.read_count("/s/D.csproj"), 1);
}

#[test]
fn test_identities_are_unique() {
    let mut reader = diamond();
    let graph = run(&mut reader, "/s/A.csproj", WorklistOrder::Lifo).unwrap();

    let mut ids: Vec<Uuid> = graph.repository.iter().map(|n| n.id()).collect();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_cycle_terminates_with_three_nodes() {
    let mut reader = MemoryReader::new()
        .with_project("/c/A.csproj", project(Some(1), &[("/c/B.csproj", Some(2))]))
        .with_project("/c/B.csproj", project(Some(2), &[("/c/C.csproj", Some(3))]))
        .with_project("/c/C.csproj", project(Some(3), &[("/c/A.csproj", Some(1))]));

    let graph = run(&mut reader, "/c/A.csproj", WorklistOrder::Fifo).unwrap();

    assert_eq!(graph.repository.len(), 3);
    let a = graph.repository.get(&uid(1)).unwrap();
    assert!(a.parents().contains_key(&LinkKey::Id(uid(3))));
    assert_eq!(reader.reads().len(), 3);
}

#[test]
fn test_self_reference_becomes_own_parent() {
    let mut reader = MemoryReader::new()
        .with_project("/c/A.csproj", project(Some(1), &[("/c/A.csproj", Some(1))]));

    let graph = run(&mut reader, "/c/A.csproj", WorklistOrder::Fifo).unwrap();
    let a = graph.repository.get(&uid(1)).unwrap();
    assert!(a.parents().contains_key(&LinkKey::Id(uid(1))));
}

#[test]
fn test_worklist_order_does_not_change_the_graph() {
    let build = || {
        MemoryReader::new()
            .with_project(
                "/o/A.csproj",
                project(Some(1), &[("/o/B.csproj", None), ("/o/C.csproj", Some(3)), ("/o/E.csproj", None)]),
            )
            .with_project("/o/B.csproj", project(None, &[("/o/D.csproj", Some(4)), ("/o/C.csproj", None)]))
            .with_project("/o/C.csproj", project(Some(3), &[("/o/D.csproj", None), ("/o/A.csproj", Some(1))]))
            .with_project("/o/D.csproj", project(Some(4), &[("/o/B.csproj", None)]))
    };

    let fifo = run(&mut build(), "/o/A.csproj", WorklistOrder::Fifo).unwrap();
    let lifo = run(&mut build(), "/o/A.csproj", WorklistOrder::Lifo).unwrap();

    let fifo_nodes: Vec<_> = fifo.repository.iter().cloned().collect();
    let lifo_nodes: Vec<_> = lifo.repository.iter().cloned().collect();
    assert_eq!(fifo_nodes.len(), 4);
    assert_eq!(fifo_nodes, lifo_nodes);
}

#[test]
fn test_manifest_seeds_resolve_cross_links() {
    let (ga, gb) = (uid(0xA), uid(0xB));
    let mut reader = MemoryReader::new()
        .with_manifest(
            "/m/All.sln",
            vec![
                ManifestEntry {
                    name: "A".to_string(),
                    path: PathBuf::from("/m/A/A.csproj"),
                    id: ga,
                },
                ManifestEntry {
                    name: "B".to_string(),
                    path: PathBuf::from("/m/B/B.csproj"),
                    id: gb,
                },
            ],
        )
        .with_project("/m/A/A.csproj", project(None, &[("/m/B/B.csproj", Some(0xB))]))
        .with_project("/m/B/B.csproj", project(None, &[]));

    let mut graph = RootGraph::new("/m/All.sln", RootKind::Solution, None);
    discover(&mut graph, &mut reader, DiscoveryOptions::default()).unwrap();

    let a = graph.repository.get(&ga).unwrap();
    let to_b = a.children().get(&LinkKey::Id(gb)).unwrap();
    assert!(to_b.is_resolved());

    let b = graph.repository.get(&gb).unwrap();
    let to_a = b.parents().get(&LinkKey::Id(ga)).unwrap();
    assert!(to_a.is_resolved());
    assert_eq!(reader.read_count("/m/B/B.csproj"), 1);
}

#[test]
fn test_manifest_identity_conflicting_with_descriptor_is_fatal() {
    let mut reader = MemoryReader::new()
        .with_manifest(
            "/m/All.sln",
            vec![ManifestEntry {
                name: "A".to_string(),
                path: PathBuf::from("/m/A.csproj"),
                id: uid(1),
            }],
        )
        .with_project("/m/A.csproj", project(Some(2), &[]));

    let mut graph = RootGraph::new("/m/All.sln", RootKind::Solution, None);
    let err = discover(&mut graph, &mut reader, DiscoveryOptions::default()).unwrap_err();
    match err {
        GraphError::ConflictingIdentity { expected, declared, .. } => {
            assert_eq!(expected, uid(1));
            assert_eq!(declared, uid(2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_referrers_recording_different_identities_is_fatal() {
    let mut reader = MemoryReader::new()
        .with_project("/r/A.csproj", project(Some(1), &[("/r/B.csproj", Some(2)), ("/r/C.csproj", Some(3))]))
        .with_project("/r/B.csproj", project(Some(2), &[("/r/D.csproj", Some(7))]))
        .with_project("/r/C.csproj", project(Some(3), &[("/r/D.csproj", Some(8))]))
        .with_project("/r/D.csproj", project(None, &[]));

    let err = run(&mut reader, "/r/A.csproj", WorklistOrder::Fifo).unwrap_err();
    assert!(matches!(err, GraphError::ConflictingIdentity { .. }));
}

#[test]
fn test_missing_child_is_skipped_and_link_kept() {
    let mut reader = MemoryReader::new()
        .with_project("/x/A.csproj", project(Some(1), &[("/x/Gone.csproj", None)]));

    let mut graph = RootGraph::new("/x/A.csproj", RootKind::Project, None);
    let report = discover(&mut graph, &mut reader, DiscoveryOptions::default()).unwrap();

    assert_eq!(graph.repository.len(), 1);
    assert_eq!(report.missing, 1);
    let a = graph.repository.get(&uid(1)).unwrap();
    assert!(
        a.children()
            .contains_key(&LinkKey::Path(PathBuf::from("/x/Gone.csproj")))
    );
}

#[test]
fn test_missing_root_is_fatal() {
    let mut reader = MemoryReader::new();
    let err = run(&mut reader, "/x/A.csproj", WorklistOrder::Fifo).unwrap_err();
    assert!(matches!(err, GraphError::NotFound { .. }));
}

#[test]
fn test_fallback_identity_is_stable() {
    let path = Path::new("/x/NoGuid.csproj");
    assert_eq!(fallback_identity(path), fallback_identity(path));
    assert_ne!(fallback_identity(path), fallback_identity(Path::new("/x/Other.csproj")));
    assert_eq!(resolve_identity(path, None, None).unwrap(), fallback_identity(path));
}

#[test]
fn test_resolve_identity_prefers_any_recorded_value() {
    let path = Path::new("/x/A.csproj");
    assert_eq!(resolve_identity(path, Some(uid(1)), None).unwrap(), uid(1));
    assert_eq!(resolve_identity(path, None, Some(uid(2))).unwrap(), uid(2));
    assert_eq!(resolve_identity(path, Some(uid(3)), Some(uid(3))).unwrap(), uid(3));
}

#[test]
fn test_parse_error_aborts_discovery() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let root = fixture.write_project(
        "A/A.csproj",
        &ProjectXml::new().guid(uid(1)).reference("..\\B\\B.csproj", None),
    )?;
    fixture.write_file("B/B.csproj", "<Project><PropertyGroup></Project>")?;

    let mut graph = RootGraph::open(&root, None)?;
    let err = discover(&mut graph, &mut MsBuildReader, DiscoveryOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Descriptor(DescriptorError::Parse { .. })
    ));
    Ok(())
}

#[test]
fn test_each_descriptor_is_parsed_once_on_disk() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let root = fixture.write_project(
        "A/A.csproj",
        &ProjectXml::new()
            .guid(uid(1))
            .reference("..\\B\\B.csproj", None)
            .reference("../C/C.csproj", None),
    )?;
    fixture.write_project("B/B.csproj", &ProjectXml::new().guid(uid(2)).reference("..\\D\\D.csproj", None))?;
    fixture.write_project("C/C.csproj", &ProjectXml::new().guid(uid(3)).reference("../B/../D/D.csproj", None))?;
    fixture.write_project("D/D.csproj", &ProjectXml::new())?;

    let mut reader = CachedReader::new(MsBuildReader);
    let mut graph = RootGraph::open(&root, Some(2))?;
    discover(&mut graph, &mut reader, DiscoveryOptions::default())?;

    assert_eq!(graph.repository.len(), 4);
    assert_eq!(reader.parse_count(), 4);

    let d_path = crate::descriptor::paths::normalize(fixture.file("D/D.csproj"));
    let d = graph.repository.find_by_path(&d_path).unwrap();
    assert_eq!(d.id(), fallback_identity(&d_path));
    assert_eq!(d.parents().len(), 2);
    Ok(())
}
