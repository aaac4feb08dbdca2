use super::*;
use tempfile::TempDir;

const SOLUTION: &str = "\u{feff}
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
VisualStudioVersion = 17.0.31903.59
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"src\\App\\App.csproj\", \"{6A5D6B0E-0D4B-4C8B-9E61-3C2F4B1A7D10}\"
EndProject
Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"Solution Items\", \"Solution Items\", \"{11111111-2222-3333-4444-555555555555}\"
EndProject
Project(\"{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}\") = \"Engine\", \"native\\Engine\\Engine.vcxproj\", \"{9B1E4D3C-2A7F-4E6B-8C5D-1F0A3B2C4D5E}\"
EndProject
Global
EndGlobal
";

#[test]
fn test_parses_project_entries() {
    let entries = parse_manifest(Path::new("/repo/All.sln"), SOLUTION).unwrap();

    assert_eq!(
        entries,
        vec![
            ManifestEntry {
                name: "App".to_string(),
                path: PathBuf::from("/repo/src/App/App.csproj"),
                id: Uuid::parse_str("6a5d6b0e-0d4b-4c8b-9e61-3c2f4b1a7d10").unwrap(),
            },
            ManifestEntry {
                name: "Engine".to_string(),
                path: PathBuf::from("/repo/native/Engine/Engine.vcxproj"),
                id: Uuid::parse_str("9b1e4d3c-2a7f-4e6b-8c5d-1f0a3b2c4d5e").unwrap(),
            },
        ]
    );
}

#[test]
fn test_missing_header_is_rejected() {
    let err = parse_manifest(Path::new("/repo/All.sln"), "\n\nnot a solution\n").unwrap_err();
    match err {
        DescriptorError::Manifest { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_manifest_is_rejected() {
    let err = parse_manifest(Path::new("/repo/All.sln"), "").unwrap_err();
    assert!(matches!(err, DescriptorError::Manifest { .. }));
}

#[test]
fn test_malformed_project_line_reports_line_number() {
    let text = "Microsoft Visual Studio Solution File, Format Version 12.00\nProject(\"{X}\") = \"App\", \"App.csproj\"\n";
    let err = parse_manifest(Path::new("/repo/All.sln"), text).unwrap_err();
    match err {
        DescriptorError::Manifest { line, reason, .. } => {
            assert_eq!(line, 2);
            assert_eq!(reason, "malformed Project line");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_guid_is_rejected() {
    let text = "Microsoft Visual Studio Solution File, Format Version 12.00\nProject(\"{X}\") = \"App\", \"App.csproj\", \"{nope}\"\n";
    let err = parse_manifest(Path::new("/repo/All.sln"), text).unwrap_err();
    assert!(err.to_string().contains("invalid project GUID"));
}

#[test]
fn test_read_manifest_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("All.sln");
    std::fs::write(&path, SOLUTION).unwrap();

    let entries = read_manifest(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].path.starts_with(dir.path()));
}

#[test]
fn test_read_manifest_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_manifest(&dir.path().join("Nope.sln")).unwrap_err();
    assert!(matches!(err, DescriptorError::NotFound { .. }));
}
