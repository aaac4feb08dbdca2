use super::*;
use crate::descriptor::{DescriptorReader, MsBuildReader, read_manifest};

#[test]
fn test_writes_nested_files() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;

    let path = fixture.write_file("src/App/notes.txt", "hello")?;

    assert!(path.is_file());
    assert!(fixture.file_exists("src/App/notes.txt"));
    assert_eq!(fixture.read_file("src/App/notes.txt")?, "hello");
    Ok(())
}

#[test]
fn test_written_project_parses() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let id = Uuid::from_u128(7);

    let path = fixture.write_project(
        "src/App/App.csproj",
        &ProjectXml::new()
            .guid(id)
            .name("App")
            .reference("..\\Core\\Core.csproj", None),
    )?;

    let descriptor = MsBuildReader.read(&path)?;
    assert_eq!(descriptor.identity, Some(id));
    assert_eq!(
        descriptor.project_references[0].path,
        fixture.file("src/Core/Core.csproj")
    );
    Ok(())
}

#[test]
fn test_written_solution_parses() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TempDirFixture::new()?;
    let path = fixture.write_solution(
        "All.sln",
        &[("App", "src\\App\\App.csproj", Uuid::from_u128(1))],
    )?;

    let entries = read_manifest(&path)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, fixture.file("src/App/App.csproj"));
    Ok(())
}

#[test]
fn test_fixtures_are_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDirFixture::new()?;
    let second = TempDirFixture::new()?;
    first.write_file("a.txt", "a")?;

    assert_ne!(first.path(), second.path());
    assert!(!second.file_exists("a.txt"));
    Ok(())
}
