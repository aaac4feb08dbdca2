use super::*;
use crate::application::cli::Cli;
use crate::output::DEFAULT_YUML_URL;
use crate::primitives::OutputType;
use crate::testing::{ProjectXml, TempDirFixture};
use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

fn uid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn args(root_file: PathBuf, output_folder: PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        root_file,
        merge_with: Vec::new(),
        include_external: false,
        level_to_dig: None,
        output_type: OutputType::YumlReferenceList,
        output_folder,
        output_each_item: false,
        yuml_url: DEFAULT_YUML_URL.to_string(),
    }
}

#[test]
fn test_no_command_prints_hint() {
    let mut out = Vec::new();
    execute_command_with_output(None, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("projgraph --help"));
}

#[test]
fn test_version_command() {
    let mut out = Vec::new();
    execute_command_with_output(Some(Commands::Version), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.trim(), format!("projgraph {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_analyze_writes_reference_list() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    fixture.write_project(
        "App/App.vcxproj",
        &ProjectXml::new()
            .guid(uid(1))
            .name("App")
            .reference("..\\Core\\Core.vcxproj", Some(uid(2)))
            .library("Missing.lib"),
    )?;
    fixture.write_project("Core/Core.vcxproj", &ProjectXml::new().guid(uid(2)).name("Core"))?;
    let sln = fixture.write_solution(
        "All.sln",
        &[
            ("App", "App\\App.vcxproj", uid(1)),
            ("Core", "Core\\Core.vcxproj", uid(2)),
        ],
    )?;
    let out_dir = fixture.file("out");

    let mut out = Vec::new();
    let response = handle_analyze(&args(sln, out_dir.clone()), &mut out)?;

    assert_eq!(response.path, out_dir.join("All.sln.yuml"));
    let diagram = std::fs::read_to_string(&response.path)?;
    assert!(diagram.contains("[App]->[Core]"));
    assert!(diagram.contains("[App]->[Missing.lib]"));

    let printed = String::from_utf8(out)?;
    assert!(printed.contains("2 projects from All"));
    assert!(printed.contains("1 unresolved links"));
    Ok(())
}

#[test]
fn test_analyze_missing_root_has_context() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let missing = fixture.file("Nope.sln");

    let cli = Cli::try_parse_from([
        "projgraph".into(),
        "analyze".into(),
        missing.clone().into_os_string(),
    ])?;
    let mut out = Vec::new();
    let err = execute_command_with_output(cli.command, &mut out).unwrap_err();

    assert!(err.to_string().starts_with("Failed to analyze"));
    assert!(out.is_empty());
    Ok(())
}
