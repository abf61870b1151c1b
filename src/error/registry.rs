use std::path::PathBuf;

use thiserror::Error;

/// Failures of the movie registry and its backing file.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry file could not be read or written.
    ///
    /// Absence of the file on load is not an error; this covers permission problems, full
    /// disks and similar faults. After a failed write the on-disk state is unknown.
    #[error("Failed to access movie registry at {}: {source}", path.display())]
    Io {
        /// Path of the registry file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The registry file exists but is not a JSON object of name to locator strings.
    #[error("Movie registry at {} is not valid JSON: {source}", path.display())]
    Json {
        /// Path of the registry file
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A different key already folds to the same lookup key as the new name.
    ///
    /// Names are matched ignoring case, spaces, hyphens and underscores, so accepting the new
    /// name would make one of the two entries unreachable.
    #[error("Movie '{name}' conflicts with existing movie '{existing}'")]
    NameCollision {
        /// Name that was being added
        name: String,
        /// Existing key it collides with
        existing: String,
    },
}
