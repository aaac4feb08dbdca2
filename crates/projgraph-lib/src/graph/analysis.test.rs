use super::*;
use crate::graph::link::LinkKey;
use crate::testing::{ProjectXml, TempDirFixture};
use uuid::Uuid;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[test]
fn test_solution_analysis_reconciles_libraries() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    fixture.write_project(
        "App/App.vcxproj",
        &ProjectXml::new()
            .guid(uid(1))
            .name("App")
            .library("Engine.lib")
            .library("user32.lib"),
    )?;
    fixture.write_project(
        "Engine/Engine.vcxproj",
        &ProjectXml::new().guid(uid(2)).name("Engine").configuration_type("StaticLibrary"),
    )?;
    let sln = fixture.write_solution(
        "All.sln",
        &[
            ("App", "App\\App.vcxproj", uid(1)),
            ("Engine", "Engine\\Engine.vcxproj", uid(2)),
        ],
    )?;

    let graph = analyze(&AnalysisRequest::new(&sln))?;

    assert_eq!(graph.repository.len(), 2);
    let app = graph.repository.get(&uid(1)).unwrap();
    assert!(app.children().contains_key(&LinkKey::Id(uid(2))));
    assert_eq!(app.children().placeholders().count(), 1);
    let engine = graph.repository.get(&uid(2)).unwrap();
    assert!(engine.parents().contains_key(&LinkKey::Id(uid(1))));
    Ok(())
}

#[test]
fn test_merge_with_secondary_root() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let primary = fixture.write_project(
        "P/P.vcxproj",
        &ProjectXml::new().guid(uid(1)).name("P").library("Shared.lib"),
    )?;
    let secondary = fixture.write_project(
        "Q/Q.vcxproj",
        &ProjectXml::new()
            .guid(uid(10))
            .name("Q")
            .reference("..\\Shared\\Shared.vcxproj", Some(uid(11))),
    )?;
    fixture.write_project(
        "Shared/Shared.vcxproj",
        &ProjectXml::new()
            .guid(uid(11))
            .name("Shared")
            .reference("..\\Left\\Left.vcxproj", None)
            .reference("..\\Right\\Right.vcxproj", None),
    )?;
    fixture.write_project("Left/Left.vcxproj", &ProjectXml::new().guid(uid(12)).name("Left"))?;
    fixture.write_project("Right/Right.vcxproj", &ProjectXml::new().guid(uid(13)).name("Right"))?;

    let request = AnalysisRequest {
        merge_with: vec![secondary],
        ..AnalysisRequest::new(&primary)
    };
    let graph = analyze(&request)?;

    assert_eq!(graph.repository.len(), 4);
    assert!(!graph.repository.contains(&uid(10)));
    let p = graph.repository.get(&uid(1)).unwrap();
    assert!(p.children().get(&LinkKey::Id(uid(11))).unwrap().is_resolved());
    Ok(())
}

#[test]
fn test_unsupported_secondary_fails_before_discovery() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let primary = fixture.write_project("P/P.csproj", &ProjectXml::new().guid(uid(1)))?;
    let bogus = fixture.write_file("notes.txt", "hello")?;

    let request = AnalysisRequest {
        merge_with: vec![bogus],
        ..AnalysisRequest::new(&primary)
    };
    let err = analyze(&request).unwrap_err();
    assert!(matches!(err, GraphError::UnsupportedRootType { .. }));
    Ok(())
}

#[test]
fn test_external_references_only_when_requested() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let root = fixture.write_project(
        "App/App.csproj",
        &ProjectXml::new()
            .guid(uid(1))
            .assembly("Newtonsoft.Json, Version=13.0.0.0")
            .assembly("System.Xml"),
    )?;

    let without = analyze(&AnalysisRequest::new(&root))?;
    assert!(without.repository.get(&uid(1)).unwrap().references().is_empty());

    let request = AnalysisRequest {
        include_external_references: true,
        ..AnalysisRequest::new(&root)
    };
    let with = analyze(&request)?;
    let references = with.repository.get(&uid(1)).unwrap().references();
    assert_eq!(references.len(), 1);
    Ok(())
}
