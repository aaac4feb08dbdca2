use super::*;
use crate::graph::{ProjectFamily, ProjectLink, ProjectNode, RootKind};
use crate::testing::TempDirFixture;
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[derive(Clone, Default)]
struct CountingRenderer {
    calls: Rc<Cell<usize>>,
}

impl DiagramRenderer for CountingRenderer {
    fn render_svg(&self, _diagram: &YumlDiagram) -> Result<Vec<u8>, OutputError> {
        self.calls.set(self.calls.get() + 1);
        Ok(b"<svg/>".to_vec())
    }
}

/// Zeta -> Alpha -> gdi32.lib, and a lone Solo project
fn sample() -> RootGraph {
    let mut root = RootGraph::new("/h/All.sln", RootKind::Solution, None);

    let mut zeta = ProjectNode::new(uid(1), "/h/Zeta.csproj", "Zeta", ProjectFamily::Other);
    zeta.children_mut()
        .insert(ProjectLink::resolved("/h/Alpha.csproj", uid(2)));

    let mut alpha = ProjectNode::new(uid(2), "/h/Alpha.csproj", "Alpha", ProjectFamily::Other);
    alpha.children_mut().insert_library("gdi32.lib");
    alpha.parents_mut()
        .insert(ProjectLink::resolved("/h/Zeta.csproj", uid(1)));

    let solo = ProjectNode::new(uid(3), "/h/Solo.csproj", "Solo", ProjectFamily::Other);

    root.repository.insert(zeta);
    root.repository.insert(alpha);
    root.repository.insert(solo);
    root
}

#[test]
fn test_html_sections_and_images() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let renderer = CountingRenderer::default();
    let provider = HtmlDocument::new(renderer.clone())?;

    let response = provider.create(&sample(), fixture.path())?;

    assert_eq!(response.path, fixture.path().join("references.html"));
    // whole graph, Zeta deps, Alpha deps, Alpha parents
    assert_eq!(renderer.calls.get(), 4);
    assert!(fixture.file_exists("All.sln.svg"));
    assert!(fixture.file_exists("Zeta.csproj.svg"));
    assert!(fixture.file_exists("Alpha.csproj.svg"));
    assert!(fixture.file_exists("Alpha.csproj_parents.svg"));
    assert!(!fixture.file_exists("Solo.csproj.svg"));

    let html = fixture.read_file("references.html")?;
    assert!(html.contains("All references for: All.sln"));

    let alpha = html.find("<summary>Alpha.csproj</summary>").unwrap();
    let solo = html.find("<summary>Solo.csproj</summary>").unwrap();
    let zeta = html.find("<summary>Zeta.csproj</summary>").unwrap();
    assert!(alpha < solo && solo < zeta);

    assert!(html.contains("<li>gdi32.lib</li>"));
    assert!(html.contains(&format!("<a href='#{}'>Alpha.csproj</a>", uid(2))));
    assert!(html.contains("This project is not referenced by any other projects"));
    assert!(html.contains("This project does not reference any other projects"));
    Ok(())
}

#[test]
fn test_existing_images_are_not_fetched_again() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let renderer = CountingRenderer::default();
    let provider = HtmlDocument::new(renderer.clone())?;

    provider.create(&sample(), fixture.path())?;
    let second = provider.create(&sample(), fixture.path())?;

    assert_eq!(renderer.calls.get(), 4);
    assert_eq!(second.files.len(), 1);
    Ok(())
}
