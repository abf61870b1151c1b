//! `/movie_info` - show a movie's links.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        command::{respond, string_option},
        embed,
    },
    error::AppError,
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("movie_info")
        .description("Get information about a specific movie")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "movie", "Movie to look up")
                .required(true)
                .set_autocomplete(true),
        )
}

pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let query = string_option(command, "movie")?;
    let movie = state.movies.lookup(&query).await?;

    respond(
        ctx,
        command,
        CreateInteractionResponseMessage::new().embed(embed::movie_info(&movie)),
    )
    .await
}
