use super::*;

#[test]
fn test_normalize_folds_dot_segments() {
    assert_eq!(
        normalize("/src/app/../lib/./Core.csproj"),
        PathBuf::from("/src/lib/Core.csproj")
    );
}

#[test]
fn test_normalize_accepts_backslashes() {
    assert_eq!(
        normalize("/src\\app\\..\\lib\\Core.csproj"),
        PathBuf::from("/src/lib/Core.csproj")
    );
}

#[test]
fn test_normalize_keeps_leading_parent_for_relative_paths() {
    assert_eq!(normalize("../x/../y"), PathBuf::from("../y"));
}

#[test]
fn test_normalize_does_not_climb_above_root() {
    assert_eq!(normalize("/../a"), PathBuf::from("/a"));
}

#[test]
fn test_resolve_relative_reference() {
    let base = Path::new("/repo/src/App");
    assert_eq!(
        resolve(base, "..\\Core\\Core.csproj"),
        PathBuf::from("/repo/src/Core/Core.csproj")
    );
}

#[test]
fn test_resolve_keeps_absolute_reference() {
    let base = Path::new("/repo/src/App");
    assert_eq!(
        resolve(base, "/other/./Lib.vcxproj"),
        PathBuf::from("/other/Lib.vcxproj")
    );
}

#[test]
fn test_two_spellings_resolve_to_same_path() {
    let a = resolve(Path::new("/repo/a"), "../shared/Shared.csproj");
    let b = resolve(Path::new("/repo/b/nested"), "..\\..\\shared\\Shared.csproj");
    assert_eq!(a, b);
}

#[test]
fn test_file_stem_of() {
    assert_eq!(file_stem_of("Foo.lib"), "Foo");
    assert_eq!(file_stem_of("Foo"), "Foo");
    assert_eq!(file_stem_of("..\\lib\\Foo.lib"), "Foo");
    assert_eq!(file_stem_of("/x/Foo.Bar.dll"), "Foo.Bar");
    assert_eq!(file_stem_of(".hidden"), ".hidden");
}

#[test]
fn test_file_name_of() {
    assert_eq!(file_name_of("a\\b\\c.lib"), "c.lib");
    assert_eq!(file_name_of("c.lib"), "c.lib");
}

#[test]
fn test_extension_is_lowercased() {
    assert_eq!(
        extension_of(Path::new("/x/App.SLN")).as_deref(),
        Some("sln")
    );
    assert_eq!(extension_of(Path::new("/x/Makefile")), None);
}
