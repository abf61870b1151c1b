//! Movie registry service.
//!
//! This module provides the `MovieService`, which owns the in-memory registry together with
//! the store it is persisted to. Reads go to memory; every mutation is written through to the
//! registry file before it becomes visible.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    data::registry::RegistryStore,
    error::{registry::RegistryError, AppError},
    model::{
        movie::{Locator, MovieEntry},
        registry::MovieRegistry,
    },
    service::resolver,
};

/// Service for looking up and editing the movie registry.
///
/// Clones share the same registry. Mutations hold the write lock across the file write, so
/// two concurrent `/add_movie` commands cannot interleave and the last one to acquire the lock
/// wins.
#[derive(Clone)]
pub struct MovieService {
    registry: Arc<RwLock<MovieRegistry>>,
    store: RegistryStore,
}

impl MovieService {
    /// Loads the registry through `store` and wraps it in a service.
    ///
    /// # Returns
    /// - `Ok(MovieService)` - Service holding the loaded registry
    /// - `Err(AppError::RegistryErr)` - The registry file could not be read or created
    pub async fn load(store: RegistryStore) -> Result<Self, AppError> {
        let registry = store.load().await?;

        tracing::info!(
            "Loaded {} movie(s) from {}",
            registry.len(),
            store.path().display()
        );

        Ok(Self {
            registry: Arc::new(RwLock::new(registry)),
            store,
        })
    }

    /// Movie names in insertion order.
    pub async fn names(&self) -> Vec<String> {
        self.registry
            .read()
            .await
            .names()
            .map(str::to_string)
            .collect()
    }

    pub async fn count(&self) -> usize {
        self.registry.read().await.len()
    }

    /// Resolves user input to a registry entry, ignoring case and separators.
    ///
    /// # Returns
    /// - `Ok(MovieEntry)` - Stored name and locator
    /// - `Err(AppError::NotFound)` - No matching movie
    pub async fn lookup(&self, query: &str) -> Result<MovieEntry, AppError> {
        resolver::resolve_entry(query, &*self.registry.read().await)
    }

    /// Ranked name suggestions for partially typed input.
    pub async fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        resolver::suggest(prefix, &*self.registry.read().await, limit)
    }

    /// Adds or replaces a movie.
    ///
    /// The name is trimmed. Re-adding the exact same name replaces its locator in place. A
    /// different name that folds to the same lookup key as an existing one is rejected, since
    /// only one of the two could ever be found.
    ///
    /// # Arguments
    /// - `name` - Display name as typed by the admin
    /// - `locator` - Where the movie is fetched from
    ///
    /// # Returns
    /// - `Ok(MovieEntry)` - The stored entry
    /// - `Err(AppError::BadRequest)` - Name is empty after trimming
    /// - `Err(AppError::RegistryErr(NameCollision))` - Name collides with another key
    /// - `Err(AppError::RegistryErr(Io))` - Saving failed; the registry is unchanged
    pub async fn add(&self, name: &str, locator: Locator) -> Result<MovieEntry, AppError> {
        let name = name.trim();
        if resolver::fold(name).is_empty() {
            return Err(AppError::BadRequest(
                "Movie name must contain at least one letter or digit.".to_string(),
            ));
        }

        let mut registry = self.registry.write().await;

        if let Some(existing) = resolver::find_colliding(name, &registry) {
            if existing != name {
                return Err(RegistryError::NameCollision {
                    name: name.to_string(),
                    existing: existing.to_string(),
                }
                .into());
            }
        }

        let mut updated = registry.clone();
        updated.insert(name.to_string(), locator.clone());
        self.persist(&mut registry, updated).await?;

        tracing::info!("Added movie '{}' ({} total)", name, registry.len());

        Ok(MovieEntry {
            name: name.to_string(),
            locator,
        })
    }

    /// Removes the movie `query` resolves to.
    ///
    /// # Returns
    /// - `Ok(MovieEntry)` - The removed entry, with its stored name
    /// - `Err(AppError::NotFound)` - No matching movie
    /// - `Err(AppError::RegistryErr(Io))` - Saving failed; the registry is unchanged
    pub async fn remove(&self, query: &str) -> Result<MovieEntry, AppError> {
        let mut registry = self.registry.write().await;

        let entry = resolver::resolve_entry(query, &registry)?;

        let mut updated = registry.clone();
        updated.remove(&entry.name);
        self.persist(&mut registry, updated).await?;

        tracing::info!("Removed movie '{}' ({} left)", entry.name, registry.len());

        Ok(entry)
    }

    /// Saves `updated` and swaps it in as the current registry.
    ///
    /// On a failed save the in-memory registry is left as it was and the file is re-read, so
    /// memory follows whatever actually reached the disk. If the re-read also fails, memory
    /// keeps the last known good state.
    async fn persist(
        &self,
        current: &mut MovieRegistry,
        updated: MovieRegistry,
    ) -> Result<(), AppError> {
        match self.store.save(&updated).await {
            Ok(()) => {
                *current = updated;
                Ok(())
            }
            Err(save_err) => {
                tracing::error!("Failed to save movie registry: {}", save_err);
                match self.store.load().await {
                    Ok(on_disk) => *current = on_disk,
                    Err(load_err) => {
                        tracing::error!("Failed to reload movie registry: {}", load_err)
                    }
                }
                Err(save_err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    async fn service_for(test: &test_utils::context::TestContext) -> MovieService {
        MovieService::load(RegistryStore::new(test.registry_path()))
            .await
            .unwrap()
    }

    /// Tests lookups and listings against a seeded registry.
    ///
    /// Expected: Fold-insensitive lookup and names in insertion order
    #[tokio::test]
    async fn looks_up_seeded_movies() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;

        let entry = service.lookup("the-matrix").await.unwrap();

        assert_eq!(entry.name, "The Matrix");
        assert_eq!(service.count().await, 5);
        assert_eq!(service.names().await[0], "Superman");
        assert!(matches!(
            service.lookup("Gattaca").await,
            Err(AppError::NotFound(_))
        ));
    }

    /// Tests that adding a movie persists it to disk.
    ///
    /// Expected: Ok and the new name present after a fresh load
    #[tokio::test]
    async fn add_writes_through_to_disk() {
        let test = TestBuilder::new().build().unwrap();
        let service = service_for(&test).await;
        let url = factory::movie::drive_share_url(&factory::movie::unique_file_id());

        let entry = service
            .add("  Blade Runner  ", Locator::parse(&url))
            .await
            .unwrap();

        assert_eq!(entry.name, "Blade Runner");
        let reloaded = service_for(&test).await;
        assert_eq!(reloaded.names().await, vec!["Blade Runner"]);
        assert_eq!(
            reloaded.lookup("bladerunner").await.unwrap().locator,
            Locator::parse(&url)
        );
    }

    /// Tests adding a movie stored on the local filesystem.
    ///
    /// Expected: Entry resolves to a local path locator after a fresh load
    #[tokio::test]
    async fn add_local_file() {
        let test = TestBuilder::new().build().unwrap();
        let path = test.touch("home-video.mkv").unwrap();
        let service = service_for(&test).await;

        service
            .add("Home Video", Locator::parse(&path.to_string_lossy()))
            .await
            .unwrap();

        let reloaded = service_for(&test).await;
        let entry = reloaded.lookup("home_video").await.unwrap();
        assert_eq!(entry.locator, Locator::LocalPath(path));
    }

    /// Tests that re-adding the same name replaces the locator in place.
    ///
    /// Expected: Same position, new locator
    #[tokio::test]
    async fn add_same_name_replaces_in_place() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;

        service
            .add("Superman", Locator::parse("/srv/movies/superman.mkv"))
            .await
            .unwrap();

        assert_eq!(service.names().await[0], "Superman");
        assert_eq!(service.count().await, 5);
        assert_eq!(
            service.lookup("Superman").await.unwrap().locator,
            Locator::parse("/srv/movies/superman.mkv")
        );
    }

    /// Tests that a name folding onto a different existing key is rejected.
    ///
    /// Expected: Err(NameCollision) naming the existing key, registry unchanged
    #[tokio::test]
    async fn add_rejects_fold_collision() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;
        let before = test.read_registry().unwrap();

        let result = service
            .add("the_matrix", Locator::parse("https://example.com/m"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::RegistryErr(RegistryError::NameCollision { ref existing, .. }))
                if existing == "The Matrix"
        ));
        assert_eq!(test.read_registry().unwrap(), before);
    }

    /// Tests that names made only of separators are rejected.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn add_rejects_blank_name() {
        let test = TestBuilder::new().build().unwrap();
        let service = service_for(&test).await;

        let result = service
            .add(" - _ ", Locator::parse("https://example.com/m"))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.count().await, 0);
    }

    /// Tests removal by fold-insensitive name.
    ///
    /// Expected: Stored name returned, others keep their order on disk
    #[tokio::test]
    async fn remove_by_folded_name() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;

        let removed = service.remove("THE MATRIX").await.unwrap();

        assert_eq!(removed.name, "The Matrix");
        let reloaded = service_for(&test).await;
        assert_eq!(
            reloaded.names().await,
            vec!["Superman", "Alien", "superman returns", "Batman Begins"]
        );
    }

    /// Tests removing a movie that does not exist.
    ///
    /// Expected: Err(NotFound) and the file untouched
    #[tokio::test]
    async fn remove_unknown_movie() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;
        let before = test.read_registry().unwrap();

        let result = service.remove("Gattaca").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(test.read_registry().unwrap(), before);
    }

    /// Tests that a failed save leaves memory consistent with the disk.
    ///
    /// The registry file is replaced by a directory after loading, so both the save and the
    /// re-read fail; the service must keep the last good state rather than the unsaved one.
    ///
    /// Expected: Err(RegistryErr(Io)) and the new movie absent
    #[tokio::test]
    async fn failed_save_keeps_previous_state() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;
        std::fs::remove_file(test.registry_path()).unwrap();
        std::fs::create_dir(test.registry_path()).unwrap();

        let result = service
            .add("Gattaca", Locator::parse("https://example.com/g"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::RegistryErr(RegistryError::Io { .. }))
        ));
        assert_eq!(service.count().await, 5);
        assert!(service.lookup("Gattaca").await.is_err());
    }

    /// Tests suggestions through the service.
    ///
    /// Expected: Prefix match first, then contains match
    #[tokio::test]
    async fn suggests_names() {
        let test = TestBuilder::new()
            .with_movies(factory::movie::sample_movies())
            .build()
            .unwrap();
        let service = service_for(&test).await;

        let suggestions = service.suggest("super", 25).await;

        assert_eq!(suggestions, vec!["Superman", "superman returns"]);
    }
}
