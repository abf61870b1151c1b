//! `/movies` - list the registry.

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::{command::respond, embed},
    error::AppError,
    state::AppState,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("movies").description("List available movies")
}

/// Replies with the movie list, one embed per page; pages after the first go out as followups.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let names = state.movies.names().await;

    let mut pages = embed::movie_list(&names).into_iter();
    let Some(first) = pages.next() else {
        return respond(
            ctx,
            command,
            CreateInteractionResponseMessage::new().embed(embed::no_movies()),
        )
        .await;
    };

    respond(ctx, command, CreateInteractionResponseMessage::new().embed(first)).await?;
    for page in pages {
        command
            .create_followup(&ctx.http, CreateInteractionResponseFollowup::new().embed(page))
            .await?;
    }

    Ok(())
}
