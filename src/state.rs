//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the services and settings every
//! command needs. The state is built once during startup, handed to the bot's event handler
//! and cloned into spawned tasks such as idle-disconnect timers.

use std::{sync::Arc, time::Duration};

use songbird::Songbird;

use crate::{
    config::{Config, PlaybackMode},
    service::{movie::MovieService, playback::VoiceLink, probe::LinkProbe, session::SessionTracker},
};

/// Application state containing shared services and settings.
///
/// All fields are cheap to clone:
/// - `MovieService` and `SessionTracker` share their tables through `Arc`
/// - `LinkProbe` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `Arc<Songbird>` is a reference-counted pointer to the voice manager
#[derive(Clone)]
pub struct AppState {
    /// Movie registry with write-through persistence.
    pub movies: MovieService,

    /// Active watch session of every guild.
    pub sessions: SessionTracker<VoiceLink>,

    /// Reachability check for hosted movie links.
    pub probe: LinkProbe,

    /// Songbird voice manager, also registered with the Serenity client.
    pub voice: Arc<Songbird>,

    /// Whether `/play` only shares a link or also relays audio.
    pub playback_mode: PlaybackMode,

    /// ffmpeg binary used in relay mode.
    pub ffmpeg_path: String,

    /// How long a session may sit in a channel without humans before it is evicted.
    pub idle_disconnect: Duration,
}

impl AppState {
    /// Creates the application state from loaded services and the startup configuration.
    ///
    /// # Arguments
    /// - `config` - Startup configuration supplying mode, ffmpeg path and idle delay
    /// - `movies` - Loaded movie registry service
    /// - `probe` - Link probe backed by the shared HTTP client
    /// - `voice` - Songbird manager registered with the Serenity client
    ///
    /// # Returns
    /// - `AppState` - State with an empty session table
    pub fn new(config: &Config, movies: MovieService, probe: LinkProbe, voice: Arc<Songbird>) -> Self {
        Self {
            movies,
            sessions: SessionTracker::new(),
            probe,
            voice,
            playback_mode: config.playback_mode,
            ffmpeg_path: config.ffmpeg_path.clone(),
            idle_disconnect: config.idle_disconnect,
        }
    }
}
