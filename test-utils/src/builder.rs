use indexmap::IndexMap;

use crate::{context::TestContext, error::TestError};

/// What the registry file should look like when the context is built.
enum RegistrySeed {
    /// No file is written; the store sees an absent registry.
    Absent,
    /// A JSON object built from the configured movies, in insertion order.
    Movies(IndexMap<String, String>),
    /// Raw file contents, used for malformed-file scenarios.
    Raw(String),
}

/// Builder for creating test contexts with a seeded movie registry.
///
/// Provides a fluent interface for configuring the registry file a test starts from. By default
/// no file is written, which mirrors a first start of the bot. Adding movies writes a
/// pretty-printed JSON object in the same shape the bot persists.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_movie("Superman", "https://drive.google.com/file/d/abc123/view")
///     .with_movie("Alien", "/srv/movies/alien.mkv")
///     .build()?;
/// ```
pub struct TestBuilder {
    seed: RegistrySeed,
}

impl TestBuilder {
    /// Creates a new test builder with no registry file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance that will leave the registry file absent
    pub fn new() -> Self {
        Self {
            seed: RegistrySeed::Absent,
        }
    }

    /// Adds a movie to the seeded registry file.
    ///
    /// Movies are written in the order they are added. Adding a name twice replaces the
    /// locator but keeps the original position, matching JSON object semantics.
    ///
    /// # Arguments
    /// - `name` - Registry key
    /// - `locator` - Source URL or file path stored for the key
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_movie(mut self, name: &str, locator: &str) -> Self {
        let mut movies = match self.seed {
            RegistrySeed::Movies(movies) => movies,
            _ => IndexMap::new(),
        };
        movies.insert(name.to_string(), locator.to_string());
        self.seed = RegistrySeed::Movies(movies);
        self
    }

    /// Adds several movies at once, in iteration order.
    ///
    /// # Arguments
    /// - `movies` - `(name, locator)` pairs to seed
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_movies<'a>(self, movies: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        movies
            .into_iter()
            .fold(self, |builder, (name, locator)| builder.with_movie(name, locator))
    }

    /// Writes an empty registry object (`{}`) instead of leaving the file absent.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_empty_registry(mut self) -> Self {
        self.seed = RegistrySeed::Movies(IndexMap::new());
        self
    }

    /// Writes the given raw contents as the registry file.
    ///
    /// Use this to exercise malformed or hand-edited registry files.
    ///
    /// # Arguments
    /// - `contents` - Exact file contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_registry(mut self, contents: &str) -> Self {
        self.seed = RegistrySeed::Raw(contents.to_string());
        self
    }

    /// Builds the test context.
    ///
    /// Creates a fresh temporary directory and writes the registry file according to the
    /// configured seed. The directory is removed when the returned context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary directory
    /// - `Err(TestError)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        match self.seed {
            RegistrySeed::Absent => {}
            RegistrySeed::Movies(movies) => {
                let contents = serde_json::to_string_pretty(&movies)?;
                std::fs::write(context.registry_path(), contents)?;
            }
            RegistrySeed::Raw(contents) => {
                std::fs::write(context.registry_path(), contents)?;
            }
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
