use super::*;
use crate::descriptor::DeclaredReference;
use crate::graph::link::LinkKey;

fn descriptor() -> Descriptor {
    Descriptor {
        identity: None,
        name: None,
        project_references: vec![DeclaredReference {
            path: PathBuf::from("/repo/Core/Core.vcxproj"),
            id: Some(Uuid::from_u128(2)),
        }],
        libraries: vec!["Foo.lib".to_string(), "Foo".to_string()],
        external_references: vec![ExternalReference {
            assembly_name: "Dapper".to_string(),
            version: None,
        }],
        metadata: DescriptorMetadata {
            configuration_type: Some("Application".to_string()),
            uses_mfc: true,
            ..DescriptorMetadata::default()
        },
    }
}

#[test]
fn test_family_follows_extension() {
    let metadata = DescriptorMetadata {
        framework: Some("v4.8".to_string()),
        ..DescriptorMetadata::default()
    };
    assert_eq!(
        ProjectFamily::detect(Path::new("/x/A.CSPROJ"), &metadata),
        ProjectFamily::Managed(ManagedDetails {
            framework: Some("v4.8".to_string())
        })
    );
    assert!(matches!(
        ProjectFamily::detect(Path::new("/x/A.vcxproj"), &metadata),
        ProjectFamily::Native(_)
    ));
    assert_eq!(
        ProjectFamily::detect(Path::new("/x/A.fsproj"), &metadata),
        ProjectFamily::Other
    );
}

#[test]
fn test_from_descriptor_builds_links() {
    let node = ProjectNode::from_descriptor(
        Uuid::from_u128(1),
        Path::new("/repo/App/App.vcxproj"),
        &descriptor(),
        false,
    );

    assert_eq!(node.name(), "App");
    assert_eq!(node.file_name(), "App.vcxproj");
    assert_eq!(node.children().len(), 2);
    assert!(node.children().contains_key(&LinkKey::Id(Uuid::from_u128(2))));
    assert_eq!(node.children().placeholders().count(), 1);
    assert!(node.references().is_empty());
    assert!(node.parents().is_empty());
}

#[test]
fn test_from_descriptor_keeps_external_references_when_asked() {
    let node = ProjectNode::from_descriptor(
        Uuid::from_u128(1),
        Path::new("/repo/App/App.vcxproj"),
        &descriptor(),
        true,
    );
    assert_eq!(node.references().len(), 1);
}

#[test]
fn test_declared_name_wins_over_file_stem() {
    let mut descriptor = descriptor();
    descriptor.name = Some("Contoso.App".to_string());
    let node = ProjectNode::from_descriptor(
        Uuid::from_u128(1),
        Path::new("/repo/App/App.csproj"),
        &descriptor,
        false,
    );
    assert_eq!(node.name(), "Contoso.App");
}

#[test]
fn test_absorb_unions_links() {
    let mut first = ProjectNode::new(Uuid::from_u128(5), "/repo/C.csproj", "C", ProjectFamily::Other);
    first
        .parents_mut()
        .insert(ProjectLink::resolved("/repo/A.csproj", Uuid::from_u128(1)));

    let mut second = first.clone();
    second.parents_mut().replace(
        &LinkKey::Id(Uuid::from_u128(1)),
        ProjectLink::resolved("/repo/B.csproj", Uuid::from_u128(2)),
    );

    first.absorb(&second);
    assert_eq!(first.parents().len(), 2);
}
