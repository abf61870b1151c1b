//! Voice state handler driving idle eviction.
//!
//! Whenever a voice state change leaves the session's channel without humans, a timer is
//! spawned. When it fires, the session tracker re-counts the session's current channel and
//! checks that the same session is still running before evicting, so members who come back in
//! time and sessions restarted in the meantime are left alone.

use std::sync::Arc;

use serenity::all::{Cache, ChannelId, Context, GuildId, UserId, VoiceState};

use crate::{
    model::session::{IdleOutcome, SessionToken},
    service::{
        occupancy,
        playback::{self, VoiceLink},
    },
    state::AppState,
};

/// What a voice state change means for the guild's running session.
#[derive(Debug, PartialEq, Eq)]
enum SessionEffect {
    /// The bot itself was disconnected; the session ends.
    Disconnected,
    /// The bot was moved; the session follows it to this channel.
    Moved(ChannelId),
    /// A human entered or left the session's channel.
    Recount,
    Ignore,
}

/// Classifies a voice state change against the session's channel.
///
/// # Arguments
/// - `bot_id` - User ID of this bot
/// - `session_channel` - Channel the session runs in
/// - `old` - Previous voice state of the user, if cached
/// - `new` - Current voice state of the user
/// - `is_bot` - Whether the user is a bot account
fn session_effect(
    bot_id: UserId,
    session_channel: ChannelId,
    old: Option<&VoiceState>,
    new: &VoiceState,
    is_bot: bool,
) -> SessionEffect {
    if new.user_id == bot_id {
        return match new.channel_id {
            None => SessionEffect::Disconnected,
            Some(channel) if channel != session_channel => SessionEffect::Moved(channel),
            Some(_) => SessionEffect::Ignore,
        };
    }
    if is_bot {
        return SessionEffect::Ignore;
    }

    let before = old.and_then(|previous| previous.channel_id);
    let after = new.channel_id;
    if before != after && (before == Some(session_channel) || after == Some(session_channel)) {
        SessionEffect::Recount
    } else {
        SessionEffect::Ignore
    }
}

/// Handles a voice state change in any guild.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context; its cache already reflects `new`
/// - `old` - Previous voice state of the user, if cached
/// - `new` - Current voice state of the user
pub async fn handle_voice_state_update(
    state: &AppState,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };
    let Some((token, link)) = state.sessions.current(guild_id.get()).await else {
        return;
    };

    let bot_id = ctx.cache.current_user().id;
    let is_bot = occupancy::is_bot(&ctx.cache, &new);

    match session_effect(bot_id, link.channel_id, old.as_ref(), &new, is_bot) {
        SessionEffect::Disconnected => {
            if state.sessions.release(guild_id.get(), token).await.is_some() {
                playback::leave(&state.voice, guild_id).await;
                tracing::info!("Disconnected from voice externally in guild {}", guild_id);
            }
        }
        SessionEffect::Moved(channel_id) => {
            if state
                .sessions
                .relocate(guild_id.get(), token, VoiceLink { channel_id })
                .await
            {
                tracing::info!("Moved to voice channel {} in guild {}", channel_id, guild_id);
                recount(state, &ctx.cache, guild_id, channel_id, token);
            }
        }
        SessionEffect::Recount => recount(state, &ctx.cache, guild_id, link.channel_id, token),
        SessionEffect::Ignore => {}
    }
}

/// Schedules an idle check when the channel has no humans.
fn recount(
    state: &AppState,
    cache: &Arc<Cache>,
    guild_id: GuildId,
    channel_id: ChannelId,
    token: SessionToken,
) {
    if occupancy::count_humans_cached(cache, guild_id, channel_id) == Some(0) {
        tracing::debug!(
            "Voice channel {} in guild {} is empty, checking again in {:?}",
            channel_id,
            guild_id,
            state.idle_disconnect
        );
        schedule_idle_check(state.clone(), cache.clone(), guild_id, token);
    }
}

/// Spawns the delayed re-check for an empty channel.
fn schedule_idle_check(state: AppState, cache: Arc<Cache>, guild_id: GuildId, token: SessionToken) {
    tokio::spawn(async move {
        tokio::time::sleep(state.idle_disconnect).await;

        let outcome = state
            .sessions
            .idle_check(guild_id.get(), token, |link| {
                occupancy::count_humans_cached(&cache, guild_id, link.channel_id)
            })
            .await;

        if let IdleOutcome::Evict(_) = outcome {
            playback::leave(&state.voice, guild_id).await;
            tracing::info!("Auto-disconnected from empty voice channel in guild {}", guild_id);
        }
    });
}
