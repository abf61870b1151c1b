//! `/play` - start a watch party in the invoker's voice channel.

use serenity::{
    all::{
        CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
        CreateInteractionResponseFollowup, CreateInteractionResponseMessage, GuildId,
        InteractionContext,
    },
    prelude::Mutex,
};
use songbird::Call;

use crate::{
    bot::{
        command::{require_guild, respond, string_option},
        embed,
    },
    config::PlaybackMode,
    error::AppError,
    model::{
        movie::{Locator, MovieEntry},
        session::SessionToken,
    },
    service::{
        occupancy,
        playback::{self, PlaybackEndNotifier, VoiceLink},
    },
    state::AppState,
};

/// Names listed when a requested movie is not found.
const NOT_FOUND_PREVIEW: usize = 10;

pub fn register() -> CreateCommand {
    CreateCommand::new("play")
        .description("Get movie link and join voice channel for watch party")
        .contexts(vec![InteractionContext::Guild])
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "movie", "Movie to watch")
                .required(true)
                .set_autocomplete(true),
        )
}

/// Starts a watch party.
///
/// Checks run in order: invoker in voice, movie known, no session already running, movie
/// playable in the current mode. The reply is deferred before the link probe since it can
/// take up to the probe timeout. The session slot is claimed right before joining voice, and
/// every failure after that point releases it again.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    let query = string_option(command, "movie")?;

    let Some(channel_id) = occupancy::voice_channel_of(&ctx.cache, guild_id, command.user.id)
    else {
        return Err(AppError::BadRequest(
            "You need to be in a voice channel to start a watch party!".to_string(),
        ));
    };

    let movie = match state.movies.lookup(&query).await {
        Ok(movie) => movie,
        Err(AppError::NotFound(_)) => {
            let message = not_found_message(&query, &state.movies.names().await);
            return respond(
                ctx,
                command,
                CreateInteractionResponseMessage::new()
                    .content(message)
                    .ephemeral(true),
            )
            .await;
        }
        Err(e) => return Err(e),
    };

    if let Some((_, link)) = state.sessions.current(guild_id.get()).await {
        let current = occupancy::channel_name(&ctx.cache, guild_id, link.channel_id);
        return respond(
            ctx,
            command,
            CreateInteractionResponseMessage::new()
                .content(format!(
                    "❌ Already in voice channel **{}**! Use `/stop` first.",
                    current
                ))
                .ephemeral(true),
        )
        .await;
    }

    if state.playback_mode == PlaybackMode::Link && !movie.locator.is_hosted() {
        return Err(AppError::BadRequest(format!(
            "'{}' is a local file and can only be played when the bot runs in relay mode.",
            movie.name
        )));
    }

    command.defer(&ctx.http).await?;

    let source = movie.locator.stream_source();
    match &movie.locator {
        Locator::HostedLink(_) => {
            if !state.probe.reachable(&source).await {
                tracing::warn!("Movie '{}' is not reachable at {}", movie.name, source);
                command
                    .create_followup(
                        &ctx.http,
                        CreateInteractionResponseFollowup::new()
                            .embed(embed::link_unreachable(&movie.name, &source)),
                    )
                    .await?;
                return Ok(());
            }
        }
        Locator::LocalPath(path) => {
            if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Err(AppError::Unreachable(source));
            }
        }
    }

    // The guild has a single call, so the slot is claimed before joining and a concurrent
    // /play that loses it never moves the bot.
    let link = VoiceLink { channel_id };
    let token = state.sessions.start(guild_id.get(), link).await?;

    let call = match playback::join(&state.voice, guild_id, channel_id).await {
        Ok(call) => call,
        Err(e) => {
            abandon(state, guild_id, token).await;
            return Err(e);
        }
    };

    if state.playback_mode == PlaybackMode::Relay {
        if let Err(e) = start_relay(state, guild_id, &call, &source, token).await {
            abandon(state, guild_id, token).await;
            return Err(e);
        }
    }

    tracing::info!(
        "Started watch party for '{}' in guild {} ({:?} mode)",
        movie.name,
        guild_id,
        state.playback_mode
    );

    announce(ctx, state, command, &movie, &link).await
}

/// Ends a session that failed to get going and leaves voice if it was still current.
async fn abandon(state: &AppState, guild_id: GuildId, token: SessionToken) {
    if state.sessions.release(guild_id.get(), token).await.is_some() {
        playback::leave(&state.voice, guild_id).await;
    }
}

async fn start_relay(
    state: &AppState,
    guild_id: GuildId,
    call: &Mutex<Call>,
    source: &str,
    token: SessionToken,
) -> Result<(), AppError> {
    let input = playback::spawn_transcoder(&state.ffmpeg_path, source)?;
    let on_end = PlaybackEndNotifier {
        sessions: state.sessions.clone(),
        manager: state.voice.clone(),
        guild_id,
        token,
    };

    playback::start_relay(call, input, on_end).await
}

/// Posts the watch party embed and, for hosted movies, the bare direct link.
async fn announce(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
    movie: &MovieEntry,
    link: &VoiceLink,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    let channel_name = occupancy::channel_name(&ctx.cache, guild_id, link.channel_id);

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().embed(embed::watch_party_started(
                movie,
                &channel_name,
                state.playback_mode,
            )),
        )
        .await?;

    if movie.locator.is_hosted() {
        command
            .create_followup(
                &ctx.http,
                CreateInteractionResponseFollowup::new()
                    .content(embed::direct_link_message(&movie.locator.stream_source())),
            )
            .await?;
    }

    Ok(())
}

/// Builds the reply for an unknown movie, previewing what is available.
fn not_found_message(query: &str, names: &[String]) -> String {
    let available = if names.is_empty() {
        "No movies available! Use `/add_movie` to add some.".to_string()
    } else {
        let mut preview = names
            .iter()
            .take(NOT_FOUND_PREVIEW)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if names.len() > NOT_FOUND_PREVIEW {
            preview.push_str(&format!("... and {} more", names.len() - NOT_FOUND_PREVIEW));
        }
        preview
    };

    format!(
        "❌ Movie '{}' not found!\n**Available movies:** {}\n\n*Use the autocomplete feature by typing movie names!*",
        query, available
    )
}
