//! Discovery scenarios against real descriptor files

use anyhow::Result;
use projgraph_lib::descriptor::{CachedReader, MsBuildReader};
use projgraph_lib::graph::{
    AnalysisRequest, DiscoveryOptions, LinkKey, RootGraph, WorklistOrder, analyze, discover, reconcile,
};
use projgraph_tests::{Layout, TestEnvironment, uid};
use std::collections::BTreeSet;
use std::path::Path;

fn discover_with(root: &Path, order: WorklistOrder) -> Result<RootGraph> {
    let mut graph = RootGraph::open(root, None)?;
    let mut reader = CachedReader::new(MsBuildReader);
    discover(
        &mut graph,
        &mut reader,
        DiscoveryOptions {
            order,
            ..DiscoveryOptions::default()
        },
    )?;
    reconcile(&mut graph.repository)?;
    Ok(graph)
}

/// (node id, sorted child keys, sorted parent keys) for every node
fn shape(graph: &RootGraph) -> BTreeSet<(uuid::Uuid, Vec<LinkKey>, Vec<LinkKey>)> {
    graph
        .repository
        .iter()
        .map(|node| {
            (
                node.id(),
                node.children().iter().map(|l| l.key()).collect(),
                node.parents().iter().map(|l| l.key()).collect(),
            )
        })
        .collect()
}

#[test]
fn diamond_solution_yields_one_node_per_project() -> Result<()> {
    let (_env, root) = TestEnvironment::with_layout(Layout::Diamond)?;
    let graph = analyze(&AnalysisRequest::new(&root))?;

    assert_eq!(graph.repository.len(), 4);
    let base = graph.repository.get(&uid(4)).unwrap();
    let parents: Vec<_> = base.parents().iter().map(|l| l.key()).collect();
    assert_eq!(parents, vec![LinkKey::Id(uid(2)), LinkKey::Id(uid(3))]);
    assert!(base.children().is_empty());
    Ok(())
}

#[test]
fn cycle_terminates_with_three_nodes() -> Result<()> {
    let (_env, root) = TestEnvironment::with_layout(Layout::Cycle)?;
    let graph = analyze(&AnalysisRequest::new(&root))?;

    assert_eq!(graph.repository.len(), 3);
    for node in graph.repository.iter() {
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.parents().len(), 1);
    }
    Ok(())
}

#[test]
fn worklist_order_does_not_change_the_graph() -> Result<()> {
    for layout in [Layout::Diamond, Layout::Cycle, Layout::NativeLibraries] {
        let (_env, root) = TestEnvironment::with_layout(layout)?;
        let fifo = discover_with(&root, WorklistOrder::Fifo)?;
        let lifo = discover_with(&root, WorklistOrder::Lifo)?;
        assert_eq!(shape(&fifo), shape(&lifo), "{layout:?}");
    }
    Ok(())
}

#[test]
fn library_placeholders_resolve_within_the_solution() -> Result<()> {
    let (_env, root) = TestEnvironment::with_layout(Layout::NativeLibraries)?;
    let graph = analyze(&AnalysisRequest::new(&root))?;

    let app = graph.repository.get(&uid(20)).unwrap();
    assert!(app.children().get(&LinkKey::Id(uid(21))).unwrap().is_resolved());
    let unresolved: Vec<_> = app.children().placeholders().map(|l| l.file_name()).collect();
    assert_eq!(unresolved, vec!["user32.lib".to_string()]);

    let engine = graph.repository.get(&uid(21)).unwrap();
    assert!(engine.parents().contains_key(&LinkKey::Id(uid(20))));
    Ok(())
}

#[test]
fn each_descriptor_is_parsed_once() -> Result<()> {
    let (_env, root) = TestEnvironment::with_layout(Layout::Diamond)?;
    let mut graph = RootGraph::open(&root, None)?;
    let mut reader = CachedReader::new(MsBuildReader);
    let report = discover(&mut graph, &mut reader, DiscoveryOptions::default())?;

    assert_eq!(reader.parse_count(), 4);
    assert_eq!(report.created, 4);
    Ok(())
}
