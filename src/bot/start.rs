use serenity::all::{Client, GatewayIntents};
use songbird::SerenityInit;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Starts the Discord bot and runs it until shutdown.
///
/// Songbird is registered with the manager held in `state`, so command handlers and the
/// gateway share the same voice connections.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Shared services handed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError::DiscordErr)` if client creation or the gateway connection fails
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let voice = state.voice.clone();
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(state))
        .register_songbird_with(voice)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until the shard manager shuts down
    client.start().await?;

    Ok(())
}
