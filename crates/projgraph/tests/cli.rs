use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const APP_GUID: &str = "{6F0C2E2B-3C1A-4B5E-9D2A-0A1B2C3D4E01}";
const CORE_GUID: &str = "{6F0C2E2B-3C1A-4B5E-9D2A-0A1B2C3D4E02}";

fn projgraph(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("projgraph").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("PROJGRAPH_LOG_LEVEL")
        .env_remove("PROJGRAPH_LOG_FORMAT")
        .env_remove("PROJGRAPH_LOG_OUTPUT")
        .env_remove("PROJGRAPH_COLOR")
        .env("NO_COLOR", "1");
    cmd
}

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_solution(dir: &Path) {
    write(
        dir,
        "App/App.csproj",
        &format!(
            r#"<Project><PropertyGroup><ProjectGuid>{APP_GUID}</ProjectGuid><AssemblyName>App</AssemblyName></PropertyGroup>
<ItemGroup><ProjectReference Include="..\Core\Core.csproj"><Project>{CORE_GUID}</Project></ProjectReference></ItemGroup></Project>"#
        ),
    );
    write(
        dir,
        "Core/Core.csproj",
        &format!(
            r#"<Project><PropertyGroup><ProjectGuid>{CORE_GUID}</ProjectGuid><AssemblyName>Core</AssemblyName></PropertyGroup></Project>"#
        ),
    );
    write(
        dir,
        "All.sln",
        &format!(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n\
Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"App\", \"App\\App.csproj\", \"{APP_GUID}\"\nEndProject\n\
Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"Core\", \"Core\\Core.csproj\", \"{CORE_GUID}\"\nEndProject\n"
        ),
    );
}

#[test]
fn test_version_command() {
    let temp = TempDir::new().unwrap();
    projgraph(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("projgraph "));
}

#[test]
fn test_no_command_prints_usage_hint() {
    let temp = TempDir::new().unwrap();
    projgraph(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("projgraph --help"));
}

#[test]
fn test_analyze_solution_writes_reference_list() {
    let temp = TempDir::new().unwrap();
    write_solution(temp.path());

    projgraph(temp.path())
        .args(["analyze", "All.sln", "--output-each-item"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 projects from All.sln"));

    let out = temp.path().join("ProjectDependenciesOutput");
    let diagram = fs::read_to_string(out.join("All.sln.yuml")).unwrap();
    assert!(diagram.contains("[App]->[Core]"));
    assert!(out.join("App.csproj.yuml").is_file());
    assert!(out.join("Core.csproj.yuml").is_file());
}

#[test]
fn test_analyze_url_output_to_custom_folder() {
    let temp = TempDir::new().unwrap();
    write_solution(temp.path());

    projgraph(temp.path())
        .args(["analyze", "All.sln", "--output-type", "yuml-url", "--output-folder", "urls"])
        .assert()
        .success();

    let url = fs::read_to_string(temp.path().join("urls/All.sln.url.yuml")).unwrap();
    assert!(url.starts_with("https://yuml.me/diagram/nofunky/class/"));
}

#[test]
fn test_unsupported_root_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "notes.txt", "not a project");

    projgraph(temp.path())
        .args(["analyze", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to analyze"));
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    projgraph(temp.path())
        .args(["analyze", "Missing.sln"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing.sln"));
}

#[test]
fn test_invalid_output_type_is_rejected() {
    let temp = TempDir::new().unwrap();
    projgraph(temp.path())
        .args(["analyze", "All.sln", "--output-type", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-type"));
}
