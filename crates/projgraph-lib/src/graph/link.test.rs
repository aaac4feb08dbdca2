use super::*;

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[test]
fn test_links_with_identity_compare_by_identity() {
    let a = ProjectLink::resolved("/repo/a/Core.csproj", id(1));
    let b = ProjectLink::declared("/repo/b/../a/Core.csproj", Some(id(1)));
    assert_eq!(a.key(), b.key());

    let mut set = LinkSet::new();
    assert!(set.insert(a));
    assert!(!set.insert(b));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_links_without_identity_compare_by_path() {
    let a = ProjectLink::declared("/repo/Core.csproj", None);
    let b = ProjectLink::declared("/repo/Other.csproj", None);
    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), LinkKey::Path(PathBuf::from("/repo/Core.csproj")));
}

#[test]
fn test_link_flags() {
    let placeholder = ProjectLink::placeholder("Foo.lib");
    assert!(placeholder.is_placeholder());
    assert!(!placeholder.is_resolved());
    assert_eq!(placeholder.stem(), "Foo");
    assert_eq!(placeholder.file_name(), "Foo.lib");

    let declared = ProjectLink::declared("/repo/Core.csproj", None);
    assert!(!declared.is_resolved());
    assert!(ProjectLink::resolved("/repo/Core.csproj", id(3)).is_resolved());
}

#[test]
fn test_library_aliases_do_not_duplicate() {
    let mut set = LinkSet::new();
    assert!(set.insert_library("Foo.lib"));
    assert!(!set.insert_library("Foo"));
    assert!(!set.insert_library("Foo.lib"));
    assert_eq!(set.len(), 1);

    let mut set = LinkSet::new();
    assert!(set.insert_library("Bar"));
    assert!(!set.insert_library("Bar.lib"));
    assert!(set.insert_library("Baz.dll"));
    assert_eq!(set.placeholders().count(), 2);

    // bare name first, then a declared path to the .lib
    let mut set = LinkSet::new();
    assert!(set.insert_library("Foo"));
    assert!(!set.insert_library("..\\lib\\Foo.lib"));
    assert!(!set.insert_library("FOO.lib"));
    assert_eq!(set.len(), 1);

    let mut set = LinkSet::new();
    assert!(set.insert_library("..\\lib\\Foo.lib"));
    assert!(!set.insert_library("Foo"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_retain_drops_rejected_links() {
    let mut set = LinkSet::new();
    set.insert(ProjectLink::resolved("/repo/A.csproj", id(1)));
    set.insert(ProjectLink::resolved("/repo/B.csproj", id(2)));

    set.retain(|link| link.id() == Some(id(1)));

    assert_eq!(set.len(), 1);
    assert!(set.contains_key(&LinkKey::Id(id(1))));
}

#[test]
fn test_replace_swaps_link() {
    let mut set = LinkSet::new();
    set.insert_library("Foo.lib");
    let old = LinkKey::Path(PathBuf::from("Foo.lib"));

    set.replace(&old, ProjectLink::resolved("/repo/Foo.vcxproj", id(9)));

    assert!(!set.contains_key(&old));
    assert!(set.contains_key(&LinkKey::Id(id(9))));
    assert_eq!(set.placeholders().count(), 0);
}

#[test]
fn test_replace_into_existing_link_collapses() {
    let mut set = LinkSet::new();
    set.insert(ProjectLink::resolved("/repo/Foo.vcxproj", id(9)));
    set.insert_library("Foo.lib");

    set.replace(
        &LinkKey::Path(PathBuf::from("Foo.lib")),
        ProjectLink::resolved("/repo/Foo.vcxproj", id(9)),
    );
    assert_eq!(set.len(), 1);
}

#[test]
fn test_union_is_idempotent() {
    let mut left: LinkSet = [
        ProjectLink::resolved("/a", id(1)),
        ProjectLink::resolved("/b", id(2)),
    ]
    .into_iter()
    .collect();
    let right: LinkSet = [
        ProjectLink::resolved("/b", id(2)),
        ProjectLink::resolved("/c", id(3)),
    ]
    .into_iter()
    .collect();

    left.union(&right);
    left.union(&right);
    assert_eq!(left.len(), 3);
}
