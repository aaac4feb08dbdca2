//! Merging a secondary root into the primary graph

use anyhow::Result;
use projgraph_lib::graph::{AnalysisRequest, LinkKey, analyze};
use projgraph_tests::{Layout, TestEnvironment, uid};

#[test]
fn merge_imports_named_project_and_its_descendants() -> Result<()> {
    let (env, primary) = TestEnvironment::with_layout(Layout::MergePair)?;
    let secondary = env.fixture.file("secondary/Engine.sln");

    let request = AnalysisRequest {
        merge_with: vec![secondary],
        ..AnalysisRequest::new(&primary)
    };
    let graph = analyze(&request)?;

    // Game plus Shared and its two dependencies; Tools only refers to Shared
    assert_eq!(graph.repository.len(), 4);
    for id in [30, 31, 32, 33] {
        assert!(graph.repository.contains(&uid(id)), "missing {id}");
    }
    assert!(!graph.repository.contains(&uid(34)));

    let game = graph.repository.get(&uid(30)).unwrap();
    assert_eq!(game.children().placeholders().count(), 0);
    assert!(game.children().get(&LinkKey::Id(uid(31))).unwrap().is_resolved());
    Ok(())
}

#[test]
fn without_merge_the_library_stays_a_placeholder() -> Result<()> {
    let (_env, primary) = TestEnvironment::with_layout(Layout::MergePair)?;
    let graph = analyze(&AnalysisRequest::new(&primary))?;

    assert_eq!(graph.repository.len(), 1);
    let game = graph.repository.get(&uid(30)).unwrap();
    assert_eq!(game.children().placeholders().count(), 1);
    Ok(())
}
