use super::*;
use crate::graph::{ProjectFamily, ProjectLink, ProjectNode, RootKind};
use crate::testing::TempDirFixture;
use uuid::Uuid;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// App -> Core, App -> user32.lib
fn sample() -> RootGraph {
    let mut root = RootGraph::new("/s/App/App.vcxproj", RootKind::Project, None);
    let mut app = ProjectNode::new(uid(1), "/s/App/App.vcxproj", "App", ProjectFamily::Other);
    app.children_mut()
        .insert(ProjectLink::resolved("/s/Core/Core.vcxproj", uid(2)));
    app.children_mut().insert_library("user32.lib");
    let mut core = ProjectNode::new(uid(2), "/s/Core/Core.vcxproj", "Core", ProjectFamily::Other);
    core.parents_mut()
        .insert(ProjectLink::resolved("/s/App/App.vcxproj", uid(1)));
    root.repository.insert(app);
    root.repository.insert(core);
    root
}

struct FixedRenderer;

impl DiagramRenderer for FixedRenderer {
    fn render_svg(&self, diagram: &YumlDiagram) -> Result<Vec<u8>, OutputError> {
        Ok(format!("<svg>{}</svg>", diagram.relationship_count()).into_bytes())
    }
}

#[test]
fn test_reference_list_writes_root_diagram() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let out = fixture.path().join("out");

    let response = YumlReferenceList::new(false).create(&sample(), &out)?;

    assert_eq!(response.path, out.join("App.vcxproj.yuml"));
    assert_eq!(response.files.len(), 1);
    let text = std::fs::read_to_string(&response.path)?;
    assert!(text.starts_with("// Declarations\n"));
    assert!(text.contains("[App]->[Core]\n"));
    assert!(text.contains("[App]->[user32.lib]\n"));
    Ok(())
}

#[test]
fn test_reference_list_each_item() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let out = fixture.path().to_path_buf();

    let response = YumlReferenceList::new(true).create(&sample(), &out)?;

    assert_eq!(response.files.len(), 3);
    assert!(out.join("App.vcxproj.yuml").is_file());
    let core = std::fs::read_to_string(out.join("Core.vcxproj.yuml"))?;
    assert!(core.contains("// Relationships\n"));
    assert!(!core.contains("->"));
    Ok(())
}

#[test]
fn test_url_output() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let response = YumlUrl::new("https://yuml.me").create(&sample(), fixture.path())?;

    assert_eq!(response.path, fixture.path().join("App.vcxproj.url.yuml"));
    let url = std::fs::read_to_string(&response.path)?;
    assert!(url.starts_with("https://yuml.me/diagram/nofunky/class/"));
    assert!(url.contains("%5BApp%5D-%3E%5BCore%5D"));
    assert!(!url.contains(' '));
    Ok(())
}

#[test]
fn test_image_output_uses_renderer() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let response = YumlImage::new(FixedRenderer).create(&sample(), fixture.path())?;

    assert_eq!(response.path, fixture.path().join("App.vcxproj.svg"));
    assert_eq!(std::fs::read_to_string(&response.path)?, "<svg>2</svg>");
    Ok(())
}

#[test]
fn test_factory_builds_every_provider() {
    for output_type in [
        OutputType::YumlReferenceList,
        OutputType::YumlUrl,
        OutputType::YumlImage,
        OutputType::HtmlDocument,
    ] {
        assert!(create_provider(output_type, OutputSettings::default()).is_ok());
    }
}

#[test]
fn test_unwritable_folder_is_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let blocker = fixture.write_file("blocker", "not a directory")?;

    let err = YumlReferenceList::new(false)
        .create(&sample(), &blocker.join("out"))
        .unwrap_err();
    assert!(matches!(err, OutputError::Io { .. }));
    Ok(())
}
