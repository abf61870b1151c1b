//! Error types and user-facing message mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors. Command handlers return
//! `Result<(), AppError>` and the interaction dispatcher turns any error into an ephemeral
//! reply through `AppError::user_message`, so no error reaches Serenity's own error path.

pub mod config;
pub mod registry;
pub mod session;

use thiserror::Error;

use crate::error::{config::ConfigError, registry::RegistryError, session::SessionError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Movie registry persistence or validation error.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Session slot misuse (already active / not active).
    #[error(transparent)]
    SessionErr(#[from] SessionError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Joining or leaving a voice channel failed.
    #[error(transparent)]
    VoiceErr(#[from] songbird::error::JoinError),

    /// The transcoder process could not be started.
    #[error("Failed to start transcoder: {0}")]
    TranscoderErr(#[source] std::io::Error),

    /// A movie name did not resolve against the registry.
    ///
    /// # Fields
    /// - The name that was looked up
    #[error("Movie '{0}' not found")]
    NotFound(String),

    /// A locator could not be fetched.
    ///
    /// # Fields
    /// - The URL or path that failed the probe
    #[error("Movie source is not reachable: {0}")]
    Unreachable(String),

    /// A privileged command was invoked without administrator permissions.
    #[error("Administrator permissions required")]
    PermissionDenied,

    /// Invalid command input.
    ///
    /// # Fields
    /// - Message describing what was invalid, shown to the user as-is
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is shown to the user.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to the invoking user.
    ///
    /// Maps each error variant to a short message. Input and state errors carry their own
    /// wording; persistence, Discord and transcoder failures are logged with full details and
    /// replaced with a generic message to avoid leaking paths or internals.
    ///
    /// # Returns
    /// - `String` - Message suitable for an ephemeral reply
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(name) => format!("❌ Movie '{}' not found!", name),
            Self::Unreachable(_) => {
                "❌ The movie source is not reachable. Make sure the file is shared publicly."
                    .to_string()
            }
            Self::PermissionDenied => {
                "❌ You need administrator permissions to do that!".to_string()
            }
            Self::BadRequest(msg) => format!("❌ {}", msg),
            Self::SessionErr(SessionError::AlreadyActive { .. }) => {
                "❌ A watch party is already running in this server! Use `/stop` first."
                    .to_string()
            }
            Self::SessionErr(SessionError::NotActive { .. }) => {
                "❌ No watch party is currently active!".to_string()
            }
            Self::RegistryErr(RegistryError::NameCollision { existing, .. }) => format!(
                "❌ A movie named '{}' already exists. Names ignore case, spaces, hyphens and underscores.",
                existing
            ),
            Self::VoiceErr(err) => {
                tracing::error!("Voice connection error: {}", err);
                format!("❌ Could not join voice channel: {}", err)
            }
            Self::DiscordErr(err) => {
                tracing::error!("Discord error: {}", err);
                "❌ Network error! Please try again.".to_string()
            }
            err => {
                tracing::error!("Internal error: {}", err);
                "❌ An error occurred!".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that input errors are shown verbatim with the error marker.
    ///
    /// Expected: Message contains the original text
    #[test]
    fn bad_request_is_shown_to_user() {
        let err = AppError::BadRequest("Please provide a valid Google Drive URL!".to_string());

        assert_eq!(
            err.user_message(),
            "❌ Please provide a valid Google Drive URL!"
        );
    }

    /// Tests that persistence failures do not leak file paths to users.
    ///
    /// Expected: Generic message without the path
    #[test]
    fn registry_io_error_is_generic() {
        let err = AppError::from(RegistryError::Io {
            path: "/secret/movies.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });

        let message = err.user_message();
        assert_eq!(message, "❌ An error occurred!");
        assert!(!message.contains("/secret"));
    }

    /// Tests that collisions name the existing movie.
    ///
    /// Expected: Message mentions the existing key
    #[test]
    fn name_collision_mentions_existing_movie() {
        let err = AppError::from(RegistryError::NameCollision {
            name: "super-man".to_string(),
            existing: "Superman".to_string(),
        });

        assert!(err.user_message().contains("'Superman'"));
    }
}
