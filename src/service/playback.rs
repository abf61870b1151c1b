//! Voice connections and the audio relay.
//!
//! Joining and leaving voice channels goes through songbird. In relay mode the movie's audio
//! is decoded by an external ffmpeg process into raw 48 kHz stereo PCM, which songbird mixes
//! into the call. When relayed playback ends the session is released by token, so an explicit
//! `/stop` that already ended it, or a newer session in the same guild, is left alone.

use std::{
    process::{Command, Stdio},
    sync::Arc,
};

use serenity::{
    all::{ChannelId, GuildId},
    async_trait,
    prelude::Mutex,
};
use songbird::{
    input::{core::io::ReadOnlySource, ChildContainer, Input, RawAdapter},
    Call, Event, EventContext, EventHandler as VoiceEventHandler, Songbird, TrackEvent,
};

use crate::{error::AppError, model::session::SessionToken, service::session::SessionTracker};

/// Output sample rate requested from the transcoder; songbird mixes at 48 kHz.
const RELAY_SAMPLE_RATE: u32 = 48_000;
/// Output channel count requested from the transcoder.
const RELAY_CHANNELS: u32 = 2;

/// Voice side of a session: the channel it runs in.
///
/// The call itself is owned by the songbird manager and looked up per guild, so a session can
/// claim its slot before the connection exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceLink {
    /// Voice channel the bot is, or is about to be, connected to.
    pub channel_id: ChannelId,
}

/// Joins a voice channel.
///
/// # Returns
/// - `Ok(Arc<Mutex<Call>>)` - The connected call for the guild
/// - `Err(AppError::VoiceErr)` - Songbird could not connect
pub async fn join(
    manager: &Songbird,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Result<Arc<Mutex<Call>>, AppError> {
    let call = manager.join(guild_id, channel_id).await?;

    tracing::info!("Joined voice channel {} in guild {}", channel_id, guild_id);

    Ok(call)
}

/// Leaves the guild's voice channel.
///
/// Failures are logged and swallowed: the session is already gone by the time this runs, and
/// a call that no longer exists needs no cleanup.
pub async fn leave(manager: &Songbird, guild_id: GuildId) {
    if let Err(e) = manager.remove(guild_id).await {
        tracing::warn!("Failed to leave voice channel in guild {}: {}", guild_id, e);
    }
}

/// Builds the ffmpeg arguments that decode `source` into raw PCM on stdout.
///
/// Remote sources get reconnect flags so a dropped HTTP connection resumes instead of ending
/// the movie early.
pub fn transcoder_args(source: &str) -> Vec<String> {
    let mut args: Vec<String> = vec!["-hide_banner".into(), "-loglevel".into(), "error".into()];

    if is_remote(source) {
        args.extend(
            [
                "-reconnect",
                "1",
                "-reconnect_streamed",
                "1",
                "-reconnect_delay_max",
                "5",
            ]
            .map(String::from),
        );
    }

    args.extend(["-i".to_string(), source.to_string()]);
    args.extend(
        [
            "-vn",
            "-f",
            "f32le",
            "-acodec",
            "pcm_f32le",
            "-ac",
            &RELAY_CHANNELS.to_string(),
            "-ar",
            &RELAY_SAMPLE_RATE.to_string(),
            "-",
        ]
        .map(String::from),
    );

    args
}

fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Starts the transcoder for `source` and wraps its output as a songbird input.
///
/// The child process is killed when the input is dropped.
///
/// # Arguments
/// - `ffmpeg_path` - ffmpeg binary to run
/// - `source` - Direct URL or local path of the movie
///
/// # Returns
/// - `Ok(Input)` - Raw PCM input ready to play
/// - `Err(AppError::TranscoderErr)` - The process could not be spawned
pub fn spawn_transcoder(ffmpeg_path: &str, source: &str) -> Result<Input, AppError> {
    let child = Command::new(ffmpeg_path)
        .args(transcoder_args(source))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(AppError::TranscoderErr)?;

    let adapter = RawAdapter::new(
        ReadOnlySource::new(ChildContainer::from(child)),
        RELAY_SAMPLE_RATE,
        RELAY_CHANNELS,
    );

    Ok(adapter.into())
}

/// Plays `input` on the session's call and releases the session when it finishes.
///
/// # Returns
/// - `Ok(())` - Playback started and the end handler is registered
/// - `Err(AppError::InternalError)` - The track ended before the handler could be attached
pub async fn start_relay(
    call: &Mutex<Call>,
    input: Input,
    on_end: PlaybackEndNotifier,
) -> Result<(), AppError> {
    let track = call.lock().await.play_input(input);

    for event in [TrackEvent::End, TrackEvent::Error] {
        track
            .add_event(Event::Track(event), on_end.clone())
            .map_err(|e| {
                AppError::InternalError(format!("Failed to watch relayed track: {}", e))
            })?;
    }

    Ok(())
}

/// Releases a session once its relayed track stops.
#[derive(Clone)]
pub struct PlaybackEndNotifier {
    pub sessions: SessionTracker<VoiceLink>,
    pub manager: Arc<Songbird>,
    pub guild_id: GuildId,
    pub token: SessionToken,
}

#[async_trait]
impl VoiceEventHandler for PlaybackEndNotifier {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<Event> {
        if self
            .sessions
            .release(self.guild_id.get(), self.token)
            .await
            .is_some()
        {
            leave(&self.manager, self.guild_id).await;
            tracing::info!("Playback finished in guild {}", self.guild_id);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests transcoder arguments for a local file.
    ///
    /// Expected: No reconnect flags; input followed by raw PCM output to stdout
    #[test]
    fn local_source_args() {
        let args = transcoder_args("/srv/movies/alien.mkv");

        assert!(!args.iter().any(|arg| arg == "-reconnect"));
        let input = args.iter().position(|arg| arg == "-i").unwrap();
        assert_eq!(args[input + 1], "/srv/movies/alien.mkv");
        assert_eq!(
            &args[input + 2..],
            ["-vn", "-f", "f32le", "-acodec", "pcm_f32le", "-ac", "2", "-ar", "48000", "-"]
        );
    }

    /// Tests transcoder arguments for a remote URL.
    ///
    /// Expected: Reconnect flags placed before the input
    #[test]
    fn remote_source_args() {
        let url = "https://drive.google.com/uc?export=download&id=abc";
        let args = transcoder_args(url);

        let reconnect = args.iter().position(|arg| arg == "-reconnect").unwrap();
        let input = args.iter().position(|arg| arg == "-i").unwrap();
        assert!(reconnect < input);
        assert_eq!(args[input + 1], url);
    }

    /// Tests that a missing ffmpeg binary is reported as a transcoder error.
    ///
    /// Expected: Err(AppError::TranscoderErr)
    #[test]
    fn missing_binary_is_transcoder_error() {
        let result = spawn_transcoder("/nonexistent/ffmpeg-binary", "/srv/movies/alien.mkv");

        assert!(matches!(result, Err(AppError::TranscoderErr(_))));
    }
}
