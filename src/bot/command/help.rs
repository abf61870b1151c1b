//! `/help` - usage overview.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateInteractionResponseMessage};

use crate::{
    bot::{command::respond, embed},
    error::AppError,
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Show bot help and setup instructions")
}

pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new().embed(embed::help(state.playback_mode)),
    )
    .await
}
