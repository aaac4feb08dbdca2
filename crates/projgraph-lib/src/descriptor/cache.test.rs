use super::*;

#[derive(Default)]
struct CountingReader {
    calls: Vec<PathBuf>,
}

impl DescriptorReader for CountingReader {
    fn read(&mut self, path: &Path) -> Result<Arc<Descriptor>, DescriptorError> {
        self.calls.push(path.to_path_buf());
        if path.ends_with("Broken.csproj") {
            return Err(DescriptorError::Parse {
                path: path.to_path_buf(),
                reason: "broken".to_string(),
            });
        }
        Ok(Arc::new(Descriptor {
            name: Some(path.display().to_string()),
            ..Descriptor::default()
        }))
    }
}

#[test]
fn test_each_normalised_path_is_read_once() {
    let mut reader = CachedReader::new(CountingReader::default());

    let first = reader.read(Path::new("/repo/a/A.csproj")).unwrap();
    let second = reader.read(Path::new("/repo/b/../a/./A.csproj")).unwrap();
    let third = reader.read(Path::new("/repo\\a\\A.csproj")).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(reader.parse_count(), 1);
    assert_eq!(reader.cached(), 1);
}

#[test]
fn test_distinct_paths_are_read_separately() {
    let mut reader = CachedReader::new(CountingReader::default());
    reader.read(Path::new("/repo/A.csproj")).unwrap();
    reader.read(Path::new("/repo/B.csproj")).unwrap();
    assert_eq!(reader.parse_count(), 2);

    let inner = reader.into_inner();
    assert_eq!(
        inner.calls,
        vec![PathBuf::from("/repo/A.csproj"), PathBuf::from("/repo/B.csproj")]
    );
}

#[test]
fn test_errors_are_propagated_and_not_cached() {
    let mut reader = CachedReader::new(CountingReader::default());
    assert!(reader.read(Path::new("/repo/Broken.csproj")).is_err());
    assert!(reader.read(Path::new("/repo/Broken.csproj")).is_err());
    assert_eq!(reader.parse_count(), 2);
    assert_eq!(reader.cached(), 0);
}
