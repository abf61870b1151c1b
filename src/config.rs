use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::error::{config::ConfigError, AppError};

const DEFAULT_MOVIE_LIST_FILE: &str = "movies.json";
const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";
const DEFAULT_IDLE_DISCONNECT_SECS: u64 = 30;

/// Value shipped in sample `.env` files; treated the same as an unset token.
const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

/// How a watch party delivers the movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Join the voice channel and share a direct link everyone opens themselves.
    Link,
    /// Join the voice channel and stream the movie's audio through the transcoder.
    Relay,
}

impl FromStr for PlaybackMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "link" => Ok(Self::Link),
            "relay" => Ok(Self::Relay),
            _ => Err(()),
        }
    }
}

pub struct Config {
    pub discord_token: String,

    pub movie_list_file: PathBuf,

    pub playback_mode: PlaybackMode,
    pub ffmpeg_path: String,
    pub idle_disconnect: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map so they never touch global
    /// state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty() && token != TOKEN_PLACEHOLDER)
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let movie_list_file = lookup("MOVIE_LIST_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MOVIE_LIST_FILE));

        let playback_mode = match lookup("PLAYBACK_MODE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PLAYBACK_MODE".to_string(),
                value,
                expected: "'link' or 'relay'",
            })?,
            None => PlaybackMode::Link,
        };

        let ffmpeg_path =
            lookup("FFMPEG_PATH").unwrap_or_else(|| DEFAULT_FFMPEG_PATH.to_string());

        let idle_disconnect_secs = match lookup("IDLE_DISCONNECT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "IDLE_DISCONNECT_SECS".to_string(),
                    value,
                    expected: "a whole number of seconds",
                })?,
            None => DEFAULT_IDLE_DISCONNECT_SECS,
        };

        Ok(Self {
            discord_token,
            movie_list_file,
            playback_mode,
            ffmpeg_path,
            idle_disconnect: Duration::from_secs(idle_disconnect_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests that only the token is required and everything else has defaults.
    ///
    /// Expected: Ok with default file, link mode, ffmpeg and 30 second idle delay
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.movie_list_file, PathBuf::from("movies.json"));
        assert_eq!(config.playback_mode, PlaybackMode::Link);
        assert_eq!(config.ffmpeg_path, "ffmpeg");
        assert_eq!(config.idle_disconnect, Duration::from_secs(30));
    }

    /// Tests that a missing token is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("DISCORD_TOKEN"))
    #[test]
    fn rejects_missing_token() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    /// Tests that the sample placeholder token counts as missing.
    ///
    /// Expected: Err(MissingEnvVar)
    #[test]
    fn rejects_placeholder_token() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "YOUR_BOT_TOKEN_HERE")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    /// Tests reading every optional variable.
    ///
    /// Expected: Ok with all overrides applied
    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("MOVIE_LIST_FILE", "/data/movies.json"),
            ("PLAYBACK_MODE", "Relay"),
            ("FFMPEG_PATH", "/usr/local/bin/ffmpeg"),
            ("IDLE_DISCONNECT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.movie_list_file, PathBuf::from("/data/movies.json"));
        assert_eq!(config.playback_mode, PlaybackMode::Relay);
        assert_eq!(config.ffmpeg_path, "/usr/local/bin/ffmpeg");
        assert_eq!(config.idle_disconnect, Duration::from_secs(5));
    }

    /// Tests that unknown playback modes are rejected rather than defaulted.
    ///
    /// Expected: Err(InvalidEnvVar) naming PLAYBACK_MODE
    #[test]
    fn rejects_unknown_playback_mode() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("PLAYBACK_MODE", "video"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "PLAYBACK_MODE"
        ));
    }

    /// Tests that a non-numeric idle delay is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) naming IDLE_DISCONNECT_SECS
    #[test]
    fn rejects_non_numeric_idle_delay() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("IDLE_DISCONNECT_SECS", "soon"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "IDLE_DISCONNECT_SECS"
        ));
    }
}
