//! Slash command definitions and dispatch.
//!
//! Each submodule owns one command: a `register` function returning its definition and a
//! `run` function executing it. Handlers return `Result<(), AppError>`; the interaction handler
//! turns errors into ephemeral replies.

pub mod add_movie;
pub mod autocomplete;
pub mod help;
pub mod movie_info;
pub mod movies;
pub mod play;
pub mod remove_movie;
pub mod stop;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, ResolvedValue,
};

use crate::{error::AppError, state::AppState};

/// Definitions of every slash command, registered globally on ready.
pub fn register_all() -> Vec<CreateCommand> {
    vec![
        play::register(),
        stop::register(),
        movies::register(),
        add_movie::register(),
        remove_movie::register(),
        movie_info::register(),
        help::register(),
    ]
}

/// Routes a command interaction to its handler.
///
/// # Returns
/// - `Ok(())` - The command replied
/// - `Err(AppError)` - The command failed before or while replying
pub async fn dispatch(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        "play" => play::run(ctx, state, command).await,
        "stop" => stop::run(ctx, state, command).await,
        "movies" => movies::run(ctx, state, command).await,
        "add_movie" => add_movie::run(ctx, state, command).await,
        "remove_movie" => remove_movie::run(ctx, state, command).await,
        "movie_info" => movie_info::run(ctx, state, command).await,
        "help" => help::run(ctx, state, command).await,
        name => Err(AppError::InternalError(format!(
            "Received unknown command '{}'",
            name
        ))),
    }
}

/// Reads a required string option.
///
/// # Returns
/// - `Ok(String)` - The option's value
/// - `Err(AppError::BadRequest)` - The option is missing or not a string
pub(crate) fn string_option(command: &CommandInteraction, name: &str) -> Result<String, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing required option '{}'.", name)))
}

/// Guild the command was invoked in.
pub(crate) fn require_guild(command: &CommandInteraction) -> Result<GuildId, AppError> {
    command.guild_id.ok_or_else(|| {
        AppError::BadRequest("This command can only be used in a server.".to_string())
    })
}

/// Checks that the invoking member has the Administrator permission.
pub(crate) fn require_admin(command: &CommandInteraction) -> Result<(), AppError> {
    let is_admin = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());

    if is_admin {
        Ok(())
    } else {
        Err(AppError::PermissionDenied)
    }
}

/// Sends the initial reply to a command.
pub(crate) async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    message: CreateInteractionResponseMessage,
) -> Result<(), AppError> {
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}
