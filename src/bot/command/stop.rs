//! `/stop` - end the watch party and leave voice.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponseMessage,
    InteractionContext,
};

use crate::{
    bot::{
        command::{require_guild, respond},
        embed,
    },
    error::AppError,
    service::{occupancy, playback},
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("stop")
        .description("End watch party and leave voice channel")
        .contexts(vec![InteractionContext::Guild])
}

/// Ends the guild's session, leaves the voice channel and reports how long it ran.
///
/// # Returns
/// - `Ok(())` - Session ended and reply sent
/// - `Err(AppError::SessionErr(NotActive))` - No session was running
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;

    let started_at = state.sessions.started_at(guild_id.get()).await;
    let link = state.sessions.stop(guild_id.get()).await?;
    playback::leave(&state.voice, guild_id).await;

    let channel_name = occupancy::channel_name(&ctx.cache, guild_id, link.channel_id);
    let watched_for = started_at.map(|started| Utc::now() - started);

    tracing::info!("Watch party ended in guild {}", guild_id);

    respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .embed(embed::watch_party_ended(&channel_name, watched_for)),
    )
    .await
}
