use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// File name used for the registry inside the temporary directory.
pub const REGISTRY_FILE_NAME: &str = "movies.json";

/// Test context containing the temporary directory a test works in.
///
/// The directory, and everything written into it, is deleted when the context is dropped, so
/// each test gets an isolated registry file.
pub struct TestContext {
    /// Temporary directory backing this context.
    dir: TempDir,
    /// Path of the registry file inside `dir`. The file may not exist.
    registry_path: PathBuf,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no registry file written yet
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::tempdir()?;
        let registry_path = dir.path().join(REGISTRY_FILE_NAME);

        Ok(Self { dir, registry_path })
    }

    /// Path of the registry file for this test.
    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// Root of the temporary directory, for tests that need extra files.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Reads the registry file as a string.
    ///
    /// # Returns
    /// - `Ok(String)` - Current file contents
    /// - `Err(TestError::Io)` - File is absent or unreadable
    pub fn read_registry(&self) -> Result<String, TestError> {
        Ok(std::fs::read_to_string(&self.registry_path)?)
    }

    /// Creates an empty file inside the temporary directory and returns its path.
    ///
    /// Used for local-path locators that must point at an existing file.
    ///
    /// # Arguments
    /// - `name` - File name relative to the temporary directory
    pub fn touch(&self, name: &str) -> Result<PathBuf, TestError> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, b"")?;
        Ok(path)
    }
}
