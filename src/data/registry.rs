//! Movie registry file repository.
//!
//! This module provides the `RegistryStore` for reading and writing the movie registry as a
//! flat JSON object of movie name to locator string. The store has no locking of its own; the
//! movie service is its only caller and serializes mutations.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{error::registry::RegistryError, model::registry::MovieRegistry};

/// Repository providing file operations for the movie registry.
///
/// Holds the path of the registry file. Cloning is cheap and every clone refers to the same
/// file.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Creates a new RegistryStore instance.
    ///
    /// # Arguments
    /// - `path` - Location of the registry JSON file
    ///
    /// # Returns
    /// - `RegistryStore` - New repository instance; nothing is read until `load`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the registry from disk.
    ///
    /// If the file does not exist an empty registry is returned and immediately persisted so
    /// the operator finds a file to edit.
    ///
    /// # Returns
    /// - `Ok(MovieRegistry)` - Entries in file order, or empty for a first start
    /// - `Err(RegistryError::Io)` - File exists but cannot be read, or the initial save failed
    /// - `Err(RegistryError::Json)` - File is not a JSON object of strings
    pub async fn load(&self) -> Result<MovieRegistry, RegistryError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let registry = MovieRegistry::new();
                self.save(&registry).await?;
                tracing::info!(
                    "Created {}. Add movies using /add_movie command.",
                    self.path.display()
                );
                return Ok(registry);
            }
            Err(source) => {
                return Err(RegistryError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| RegistryError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the registry to disk as pretty-printed JSON.
    ///
    /// The file is overwritten in place, so a failure part way through can leave it truncated.
    /// Callers should treat the on-disk state as unknown after an error and reload.
    ///
    /// # Arguments
    /// - `registry` - Registry to persist
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(RegistryError::Io)` - File could not be written
    pub async fn save(&self, registry: &MovieRegistry) -> Result<(), RegistryError> {
        let contents = serde_json::to_string_pretty(registry).map_err(|source| {
            RegistryError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|source| RegistryError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
