//! Interaction handler for slash commands and autocomplete.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::command::{self, autocomplete},
    error::AppError,
    state::AppState,
};

/// Dispatches an interaction and reports command failures to the invoker.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for replies
/// - `interaction` - The received interaction
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            if let Err(e) = command::dispatch(&ctx, state, &command).await {
                tracing::warn!("Command /{} failed: {}", command.data.name, e);
                reply_with_error(&ctx, &command, &e).await;
            }
        }
        Interaction::Autocomplete(command) => {
            if let Err(e) = autocomplete::handle(&ctx, state, &command).await {
                tracing::warn!("Autocomplete for /{} failed: {}", command.data.name, e);
            }
        }
        _ => {}
    }
}

/// Sends the error's user-facing message as an ephemeral reply.
///
/// Tries an initial response first; if the command already responded or deferred, the message
/// goes out as a followup instead.
async fn reply_with_error(ctx: &Context, command: &CommandInteraction, error: &AppError) {
    let message = error.user_message();

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(&message)
            .ephemeral(true),
    );
    if command.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(message)
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        tracing::error!("Failed to report error for /{}: {}", command.data.name, e);
    }
}
