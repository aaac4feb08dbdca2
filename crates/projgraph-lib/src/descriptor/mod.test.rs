use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_identity_with_and_without_braces() {
    let path = Path::new("/x/A.csproj");
    let bare = parse_identity(path, "8f3c6d2a-1b4e-4f6a-9c7d-2e5b8a1f0c3d").unwrap();
    let braced = parse_identity(path, " {8F3C6D2A-1B4E-4F6A-9C7D-2E5B8A1F0C3D} ").unwrap();
    assert_eq!(bare, braced);
}

#[test]
fn test_parse_identity_rejects_garbage() {
    let err = parse_identity(Path::new("/x/A.csproj"), "{not-a-guid}").unwrap_err();
    match err {
        DescriptorError::InvalidIdentity { value, .. } => assert_eq!(value, "{not-a-guid}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_msbuild_reader_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let mut reader = MsBuildReader;
    let err = reader.read(&dir.path().join("Missing.csproj")).unwrap_err();
    assert!(matches!(err, DescriptorError::NotFound { .. }));
}

#[test]
fn test_msbuild_reader_reads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("App.csproj");
    std::fs::write(
        &path,
        r#"<Project><PropertyGroup><AssemblyName>App</AssemblyName></PropertyGroup></Project>"#,
    )
    .unwrap();

    let descriptor = MsBuildReader.read(&path).unwrap();
    assert_eq!(descriptor.name.as_deref(), Some("App"));
}
