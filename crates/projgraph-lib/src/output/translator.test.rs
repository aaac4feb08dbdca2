use super::*;
use crate::graph::{ManagedDetails, NativeDetails, ProjectLink, RootKind};

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Tool -> App -> Core, App -> kernel32.lib, App uses Newtonsoft.Json
fn sample() -> RootGraph {
    let mut root = RootGraph::new("/s/All.sln", RootKind::Solution, None);

    let mut app = ProjectNode::new(
        uid(1),
        "/s/App/App.csproj",
        "App",
        ProjectFamily::Managed(ManagedDetails {
            framework: Some("v4.8".into()),
        }),
    );
    app.children_mut()
        .insert(ProjectLink::resolved("/s/Core/Core.vcxproj", uid(2)));
    app.children_mut().insert_library("kernel32.lib");
    app.add_reference(ExternalReference {
        assembly_name: "Newtonsoft.Json".into(),
        version: Some("13.0.0.0".into()),
    });
    app.parents_mut()
        .insert(ProjectLink::resolved("/s/Tool/Tool.proj", uid(3)));

    let mut core = ProjectNode::new(
        uid(2),
        "/s/Core/Core.vcxproj",
        "Core",
        ProjectFamily::Native(NativeDetails {
            configuration_type: Some("DynamicLibrary".into()),
            language_standard: Some("stdcpp17".into()),
            uses_mfc: true,
            is_managed_interop: false,
        }),
    );
    core.parents_mut()
        .insert(ProjectLink::resolved("/s/App/App.csproj", uid(1)));

    let mut tool = ProjectNode::new(uid(3), "/s/Tool/Tool.proj", "Tool", ProjectFamily::Other);
    tool.children_mut()
        .insert(ProjectLink::resolved("/s/App/App.csproj", uid(1)));

    root.repository.insert(app);
    root.repository.insert(core);
    root.repository.insert(tool);
    root
}

#[test]
fn test_notes_per_family() {
    let root = sample();
    let core = class_for_node(root.repository.get(&uid(2)).unwrap());
    assert_eq!(
        core.declaration(),
        "[Core|Type: DynamicLibrary;C++ version: stdcpp17;Is MFC: true;Is C++/CLI: false;]"
    );

    let app = class_for_node(root.repository.get(&uid(1)).unwrap());
    assert_eq!(app.declaration(), "[App|.Net Version: v4.8;]");

    let bare = ProjectNode::new(uid(9), "/x/Bare.csproj", "Bare", ProjectFamily::Managed(ManagedDetails::default()));
    assert_eq!(class_for_node(&bare).declaration(), "[Bare|C#;]");

    let unversioned = ExternalReference {
        assembly_name: "log4net".into(),
        version: None,
    };
    assert_eq!(class_for_reference(&unversioned).declaration(), "[log4net|External Reference;]");
}

#[test]
fn test_whole_graph_lists_direct_edges() {
    let root = sample();
    let translator = DiagramTranslator::new(&root);
    let diagram = translator.whole_graph();

    let relationships: Vec<_> = diagram.relationships().collect();
    assert_eq!(
        relationships,
        vec![
            "[App]->[Core]",
            "[App]->[Newtonsoft.Json]",
            "[App]->[kernel32.lib]",
            "[Tool]->[App]",
        ]
    );
    assert!(diagram
        .declarations()
        .any(|d| d == "[Newtonsoft.Json|External Reference (13.0.0.0);]"));
}

#[test]
fn test_dependency_diagram_is_transitive() {
    let root = sample();
    let translator = DiagramTranslator::new(&root);

    let from_tool = translator.dependencies(uid(3));
    assert_eq!(from_tool.relationship_count(), 4);

    let from_core = translator.dependencies(uid(2));
    assert!(from_core.is_empty());
}

#[test]
fn test_parent_diagram_follows_referrers() {
    let root = sample();
    let translator = DiagramTranslator::new(&root);

    let parents: Vec<_> = translator.parents(uid(2)).relationships().map(String::from).collect();
    assert_eq!(parents, vec!["[App]->[Core]", "[Tool]->[App]"]);

    assert!(translator.parents(uid(3)).is_empty());
    assert!(translator.parents(uid(42)).is_empty());
}
