//! `/remove_movie` - delete a movie from the registry (administrators only).

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseMessage, InteractionContext, Permissions,
};

use crate::{
    bot::command::{require_admin, respond, string_option},
    error::AppError,
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("remove_movie")
        .description("Remove a movie from the list")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .contexts(vec![InteractionContext::Guild])
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Movie to remove")
                .required(true)
                .set_autocomplete(true),
        )
}

pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_admin(command)?;
    let name = string_option(command, "name")?;

    let removed = state.movies.remove(&name).await?;

    respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new()
            .content(format!("✅ Removed movie '{}' from the list!", removed.name)),
    )
    .await
}
