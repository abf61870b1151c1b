use super::*;

/// Tests that saving a freshly loaded registry leaves the file unchanged.
///
/// Expected: Ok with identical file contents before and after
#[tokio::test]
async fn save_after_load_is_identity() -> Result<(), RegistryError> {
    let test = TestBuilder::new()
        .with_movies(factory::movie::sample_movies())
        .build()
        .unwrap();
    let store = RegistryStore::new(test.registry_path());
    let before = test.read_registry().unwrap();

    let registry = store.load().await?;
    store.save(&registry).await?;

    assert_eq!(test.read_registry().unwrap(), before);

    Ok(())
}

/// Tests that saved entries can be loaded back with their order.
///
/// Expected: Ok with the same registry after a reload
#[tokio::test]
async fn persists_new_entries() -> Result<(), RegistryError> {
    let test = TestBuilder::new().with_empty_registry().build().unwrap();
    let store = RegistryStore::new(test.registry_path());

    let mut registry = store.load().await?;
    registry.insert(
        "Zodiac".to_string(),
        Locator::parse(&factory::movie::drive_share_url("zodiac")),
    );
    registry.insert("Alien".to_string(), Locator::parse("/srv/movies/alien.mkv"));
    store.save(&registry).await?;

    let reloaded = store.load().await?;
    assert_eq!(reloaded, registry);
    assert_eq!(reloaded.names().collect::<Vec<_>>(), vec!["Zodiac", "Alien"]);

    Ok(())
}

/// Tests saving into a directory that does not exist.
///
/// Expected: Err(RegistryError::Io)
#[tokio::test]
async fn fails_when_directory_is_missing() {
    let test = TestBuilder::new().build().unwrap();
    let store = RegistryStore::new(test.dir().join("missing").join("movies.json"));

    let result = store.save(&MovieRegistry::new()).await;

    assert!(matches!(result, Err(RegistryError::Io { .. })));
}
