//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully connects to
//! Discord's gateway. The bot logs its identity and registers its slash commands globally.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers every slash command globally. A registration failure is logged and the bot keeps
/// running with whatever commands Discord already knows.
///
/// # Arguments
/// - `ctx` - Discord context for the registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} has connected to Discord!", ready.user.name);
    tracing::info!("Bot is in {} guilds", ready.guilds.len());

    match Command::set_global_commands(&ctx.http, command::register_all()).await {
        Ok(commands) => tracing::info!("Synced {} command(s)", commands.len()),
        Err(e) => tracing::error!("Failed to sync commands: {}", e),
    }
}
