use super::*;

/// Tests loading when the registry file does not exist yet.
///
/// Verifies that a missing file yields an empty registry and that the empty registry is
/// written so the next start finds a file.
///
/// Expected: Ok with empty registry and `{}` on disk
#[tokio::test]
async fn creates_empty_registry_when_absent() -> Result<(), RegistryError> {
    let test = TestBuilder::new().build().unwrap();
    let store = RegistryStore::new(test.registry_path());

    let registry = store.load().await?;

    assert!(registry.is_empty());
    assert_eq!(test.read_registry().unwrap(), "{}");

    Ok(())
}

/// Tests loading a seeded registry.
///
/// Verifies that entries come back in file order and that URLs and paths are classified.
///
/// Expected: Ok with all sample movies in insertion order
#[tokio::test]
async fn loads_entries_in_file_order() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_movies(factory::movie::sample_movies())
        .build()
        .unwrap();
    let store = RegistryStore::new(test.registry_path());

    let registry = store.load().await?;

    let expected: Vec<&str> = factory::movie::sample_movies()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(registry.names().collect::<Vec<_>>(), expected);
    assert!(registry.get("Superman").unwrap().locator.is_hosted());
    assert_eq!(
        registry.get("superman returns").unwrap().locator,
        Locator::LocalPath("/srv/movies/superman-returns.mkv".into())
    );

    Ok(())
}

/// Tests loading a file that is not valid JSON.
///
/// Expected: Err(RegistryError::Json) and the file left untouched
#[tokio::test]
async fn fails_on_malformed_json() {
    let test = TestBuilder::new()
        .with_raw_registry("{ \"Superman\": ")
        .build()
        .unwrap();
    let store = RegistryStore::new(test.registry_path());

    let result = store.load().await;

    assert!(matches!(result, Err(RegistryError::Json { .. })));
    assert_eq!(test.read_registry().unwrap(), "{ \"Superman\": ");
}

/// Tests loading a JSON document whose values are not strings.
///
/// Expected: Err(RegistryError::Json)
#[tokio::test]
async fn fails_on_non_string_values() {
    let test = TestBuilder::new()
        .with_raw_registry(r#"{"Superman": 42}"#)
        .build()
        .unwrap();
    let store = RegistryStore::new(test.registry_path());

    let result = store.load().await;

    assert!(matches!(result, Err(RegistryError::Json { .. })));
}

/// Tests loading when the registry path is a directory.
///
/// Expected: Err(RegistryError::Io), not an empty registry
#[tokio::test]
async fn fails_when_path_is_unreadable() {
    let test = TestBuilder::new().build().unwrap();
    let store = RegistryStore::new(test.dir());

    let result = store.load().await;

    assert!(matches!(result, Err(RegistryError::Io { .. })));
}

/// Tests loading an empty object.
///
/// Expected: Ok with empty registry
#[tokio::test]
async fn loads_empty_object() -> Result<(), RegistryError> {
    let test = TestBuilder::new().with_empty_registry().build().unwrap();
    let store = RegistryStore::new(test.registry_path());

    let registry: MovieRegistry = store.load().await?;

    assert!(registry.is_empty());

    Ok(())
}
